/// One progress report of the benchmark: a timestamped measurement tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed time since the start of the measured stage, in milliseconds
    pub time_ms: f64,
    /// Number of 4 KiB requests submitted so far
    pub num_reqs: u64,
    pub miss_ratio: f64,
    /// Fraction of load admitted to the cache device
    pub load_admit: f64,
    /// Cache device throughput in MiB/s
    pub cache_tp: f64,
    /// Core device throughput in MiB/s
    pub core_tp: f64,
}

/// Samples of one run, stored column-wise in file order.
///
/// Columns only grow through [`RunSeries::push`], so index `i` refers to the
/// same progress line in every column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSeries {
    times: Vec<f64>,
    num_reqs: Vec<u64>,
    miss_ratios: Vec<f64>,
    load_admits: Vec<f64>,
    cache_tps: Vec<f64>,
    core_tps: Vec<f64>,
}

impl RunSeries {
    pub fn new() -> RunSeries {
        RunSeries::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.times.push(sample.time_ms);
        self.num_reqs.push(sample.num_reqs);
        self.miss_ratios.push(sample.miss_ratio);
        self.load_admits.push(sample.load_admit);
        self.cache_tps.push(sample.cache_tp);
        self.core_tps.push(sample.core_tp);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn num_reqs(&self) -> &[u64] {
        &self.num_reqs
    }

    pub fn miss_ratios(&self) -> &[f64] {
        &self.miss_ratios
    }

    pub fn load_admits(&self) -> &[f64] {
        &self.load_admits
    }

    pub fn cache_tps(&self) -> &[f64] {
        &self.cache_tps
    }

    pub fn core_tps(&self) -> &[f64] {
        &self.core_tps
    }

    /// Reassemble the sample recorded at `index`.
    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time_ms: *self.times.get(index)?,
            num_reqs: *self.num_reqs.get(index)?,
            miss_ratio: *self.miss_ratios.get(index)?,
            load_admit: *self.load_admits.get(index)?,
            cache_tp: *self.cache_tps.get(index)?,
            core_tp: *self.core_tps.get(index)?,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(|i| self.sample(i))
    }
}

impl FromIterator<Sample> for RunSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut series = RunSeries::new();
        for sample in iter {
            series.push(sample);
        }
        series
    }
}

/// Failure to interpret a progress line.
///
/// Only lines carrying the progress marker can fail; every other line is
/// skipped without inspection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: progress line lacks the '{marker}' marker")]
    MissingMarker { line: usize, marker: &'static str },

    #[error("line {line}: progress line does not follow the expected field layout")]
    MalformedLine { line: usize },

    #[error("line {line}: cannot convert {field} value '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Trait for parsers that convert benchmark output into run samples
pub trait Parser {
    fn parse(&self, input: &str) -> Result<RunSeries, ParseError>;
}
