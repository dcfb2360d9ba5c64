//! Tabulates castle counts over a range of grid sizes.
use crate::board::{Castle, Dimensions, MoveTable};
use crate::count::{BlockHistogram, CastleCount};
use crate::errors::ConfigError;
use crate::search::{closed_form, Enumerator, SearchMode, SubresultCache};
use std::time::Instant;
use tracing::info;

/// Settings for a [`Table`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Widths `1..=max_width` are tabulated
    pub max_width: usize,
    /// Heights `1..=max_height` are tabulated
    pub max_height: usize,
    #[allow(missing_docs)]
    pub mode: SearchMode,
    /// Record block count histograms, forces a plain search
    pub histogram: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_width: 13,
            max_height: 10,
            mode: SearchMode::Cached,
            histogram: false,
        }
    }
}

impl DriverConfig {
    /// Parses `<max-width> <max-height> [--plain] [--histogram]`, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = DriverConfig::default();
        let mut positional = Vec::with_capacity(2);
        for arg in args {
            match arg.as_ref() {
                "--plain" => config.mode = SearchMode::Plain,
                "--histogram" => config.histogram = true,
                flag if flag.starts_with("--") => return Err(ConfigError::UnknownArgument(flag.to_string())),
                value if positional.len() < 2 => positional.push(value.to_string()),
                extra => return Err(ConfigError::UnknownArgument(extra.to_string())),
            }
        }

        let mut positional = positional.into_iter();
        config.max_width = parse_bound("max-width", positional.next())?;
        config.max_height = parse_bound("max-height", positional.next())?;
        Dimensions::new_checked(config.max_width, config.max_height)?;
        Ok(config)
    }
}

fn parse_bound(name: &'static str, value: Option<String>) -> Result<usize, ConfigError> {
    let value = value.ok_or(ConfigError::MissingArgument(name))?;
    value
        .parse()
        .map_err(|source| ConfigError::InvalidNumber { name, value, source })
}

/// Where a [`TableEntry`] came from
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// Known without searching, see [`closed_form`]
    ClosedForm,
    /// Found by an exhaustive search
    Search,
}

/// Result for one grid size
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct TableEntry {
    pub dims: Dimensions,
    pub count: CastleCount,
    pub source: Source,
    pub histogram: Option<BlockHistogram>,
}

/// Iterator over the results for every size up to the configured bounds.
///
/// Sizes are visited by width, then by height, so every smaller castle a cached
/// search can use is finished before it is needed.
pub struct Table {
    config: DriverConfig,
    cache: SubresultCache,
    next: Option<Dimensions>,
}

impl Table {
    #[allow(missing_docs)]
    pub fn new(config: DriverConfig) -> Self {
        let next = Dimensions::new_checked(config.max_width, config.max_height)
            .ok()
            .map(|_| Dimensions::new(1, 1));
        Table {
            config,
            cache: SubresultCache::new(),
            next,
        }
    }

    fn advance(&mut self, dims: Dimensions) {
        self.next = if dims.height() < self.config.max_height {
            Some(Dimensions::new(dims.width(), dims.height() + 1))
        } else if dims.width() < self.config.max_width {
            Some(Dimensions::new(dims.width() + 1, 1))
        } else {
            None
        };
    }

    fn compute(&mut self, dims: Dimensions) -> TableEntry {
        if !self.config.histogram {
            if let Some(count) = closed_form(dims) {
                self.cache.insert(dims, count.clone());
                return TableEntry {
                    dims,
                    count,
                    source: Source::ClosedForm,
                    histogram: None,
                };
            }
        }

        let mut castle = Castle::with_dimensions(dims);
        let moves = MoveTable::new(dims.width());
        let mut enumerator = Enumerator::new(&mut castle, &moves);
        if self.config.histogram {
            enumerator = enumerator.with_histogram();
        } else if self.config.mode == SearchMode::Cached {
            enumerator = enumerator.with_cache(&self.cache);
        }
        let report = enumerator.run();
        self.cache.insert(dims, report.count.clone());
        TableEntry {
            dims,
            count: report.count,
            source: Source::Search,
            histogram: report.histogram,
        }
    }
}

impl Iterator for Table {
    type Item = TableEntry;

    fn next(&mut self) -> Option<TableEntry> {
        let dims = self.next?;
        let started = Instant::now();
        let entry = self.compute(dims);
        info!(
            %dims,
            count = %entry.count,
            source = ?entry.source,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "castle size done"
        );
        self.advance(dims);
        Some(entry)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_arguments() {
        let config = DriverConfig::from_args(&["5", "4", "--plain"]).unwrap();
        assert_eq!(config.max_width, 5);
        assert_eq!(config.max_height, 4);
        assert_eq!(config.mode, SearchMode::Plain);
        assert!(!config.histogram);

        let config = DriverConfig::from_args(&["--histogram", "2", "3"]).unwrap();
        assert_eq!(config.mode, SearchMode::Cached);
        assert!(config.histogram);
    }

    #[test]
    fn reports_bad_arguments() {
        assert!(matches!(
            DriverConfig::from_args(&["5"]),
            Err(ConfigError::MissingArgument("max-height"))
        ));
        assert!(matches!(
            DriverConfig::from_args(&["5", "x"]),
            Err(ConfigError::InvalidNumber { name: "max-height", .. })
        ));
        assert!(matches!(
            DriverConfig::from_args(&["5", "4", "--fast"]),
            Err(ConfigError::UnknownArgument(_))
        ));
        assert!(matches!(
            DriverConfig::from_args(&["5", "4", "3"]),
            Err(ConfigError::UnknownArgument(_))
        ));
        assert!(matches!(
            DriverConfig::from_args(&["0", "4"]),
            Err(ConfigError::Dimensions(_))
        ));
    }

    #[test]
    fn table_visits_width_major() {
        let config = DriverConfig {
            max_width: 3,
            max_height: 2,
            ..DriverConfig::default()
        };
        let sizes: Vec<_> = Table::new(config)
            .map(|entry| (entry.dims.width(), entry.dims.height()))
            .collect();
        assert_eq!(sizes, [(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2)]);
    }

    #[test]
    fn cached_and_plain_tables_agree() {
        let bounds = DriverConfig {
            max_width: 5,
            max_height: 5,
            ..DriverConfig::default()
        };
        let cached: Vec<_> = Table::new(bounds.clone()).collect();
        let plain: Vec<_> = Table::new(DriverConfig {
            mode: SearchMode::Plain,
            ..bounds.clone()
        })
        .collect();
        let histograms: Vec<_> = Table::new(DriverConfig {
            histogram: true,
            ..bounds
        })
        .collect();
        assert_eq!(cached.len(), 25);
        for ((c, p), h) in cached.iter().zip(&plain).zip(&histograms) {
            assert_eq!(c.count, p.count, "{}", c.dims);
            assert_eq!(c.count, h.count, "{}", c.dims);
            assert_eq!(h.histogram.as_ref().map(BlockHistogram::to_count).as_ref(), Some(&h.count));
            assert_eq!(h.source, Source::Search);
        }
        assert_eq!(cached[0].source, Source::ClosedForm);
    }
}
