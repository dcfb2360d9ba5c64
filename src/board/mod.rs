//! Types for the castle grid: dimensions, placements, free spaces and the mutable castle state
mod castle;
mod dimensions;
mod display;
mod moves;
mod placement;

#[rustfmt::skip]
pub use self::{
    castle::{Castle, Resume},
    dimensions::Dimensions,
    display::{Preview, SpacesDisplay},
    moves::MoveTable,
    placement::{Placement, Space},
};
