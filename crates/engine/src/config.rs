use derive_builder::Builder;
use std::path::PathBuf;

/// Default capacity of the queue between the walker and the counting workers.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "DEFAULT_QUEUE_CAPACITY")]
    pub queue_capacity: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    /// Number of counting workers.
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
}

impl Config {
    /// Config scanning `root` with every other option at its default.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            walk: WalkOptions {
                root: root.into(),
                ..WalkOptions::default()
            },
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            threads: num_cpus::get(),
        }
    }
}
