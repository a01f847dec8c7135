//! Settings and selection state with full-cycle recomputation.

use std::path::PathBuf;

use preflight_estimate::MemoryEstimator;
use preflight_policy::PolicyRecommender;
use preflight_profile::{FsProbe, InputProfiler, SizeProbe, profile_concurrent};
use preflight_types::{
    ConversionMode, InputProfilingResult, MemoryEstimateInput, PerformanceSettings,
};

use crate::Snapshot;

/// Callback invoked with every published snapshot.
pub type Observer = Box<dyn Fn(&Snapshot) + Send + Sync>;

/// Owns the current selection and settings and republishes results on change.
///
/// Every mutation runs a complete cycle (profile, estimate, recommend) before
/// returning, so the published [`Snapshot`] always belongs to a single cycle.
pub struct Session<P = FsProbe> {
    settings: PerformanceSettings,
    selected_files: Vec<PathBuf>,
    profiler: InputProfiler<P>,
    estimator: MemoryEstimator,
    recommender: PolicyRecommender,
    observers: Vec<Observer>,
    latest: Snapshot,
}

impl Session {
    /// Creates a session over the filesystem and runs the first cycle.
    #[must_use]
    pub fn new(settings: PerformanceSettings, selected_files: Vec<PathBuf>) -> Self {
        Self::with_profiler(settings, selected_files, InputProfiler::new())
    }

    /// Runs a full cycle, profiling with up to `concurrency` metadata reads in flight.
    pub async fn recompute_concurrent(&mut self, concurrency: usize) -> &Snapshot {
        let profile = profile_concurrent(self.selected_files.clone(), concurrency).await;
        self.publish(profile)
    }

    /// Replaces the file selection and recomputes with concurrent profiling.
    pub async fn update_selected_files_concurrent(
        &mut self,
        files: Vec<PathBuf>,
        concurrency: usize,
    ) -> &Snapshot {
        self.selected_files = files;
        self.recompute_concurrent(concurrency).await
    }
}

impl<P: SizeProbe> Session<P> {
    /// Creates a session with a custom profiler and runs the first cycle.
    #[must_use]
    pub fn with_profiler(
        settings: PerformanceSettings,
        selected_files: Vec<PathBuf>,
        profiler: InputProfiler<P>,
    ) -> Self {
        let estimator = MemoryEstimator::new();
        let recommender = PolicyRecommender::new();
        let latest = Self::cycle(
            &profiler,
            &estimator,
            &recommender,
            settings,
            &selected_files,
            1,
        );
        tracing::debug!(
            generation = latest.generation,
            status = %latest.estimate.status(),
            "initial estimate"
        );

        Self {
            settings,
            selected_files,
            profiler,
            estimator,
            recommender,
            observers: Vec::new(),
            latest,
        }
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &PerformanceSettings {
        &self.settings
    }

    /// Returns the current file selection.
    #[must_use]
    pub fn selected_files(&self) -> &[PathBuf] {
        &self.selected_files
    }

    /// Returns the most recently completed cycle.
    #[must_use]
    pub const fn latest(&self) -> &Snapshot {
        &self.latest
    }

    /// Registers an observer; it is called on every subsequent cycle.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the file selection and recomputes.
    pub fn update_selected_files(&mut self, files: Vec<PathBuf>) -> &Snapshot {
        self.selected_files = files;
        self.recompute()
    }

    /// Replaces all settings and recomputes.
    pub fn update_settings(&mut self, settings: PerformanceSettings) -> &Snapshot {
        self.settings = settings;
        self.recompute()
    }

    /// Sets the conversion mode and recomputes.
    pub fn update_mode(&mut self, mode: ConversionMode) -> &Snapshot {
        self.settings.set_mode(mode);
        self.recompute()
    }

    /// Sets the worker count (clamped to at least 1) and recomputes.
    pub fn update_worker_count(&mut self, worker_count: u32) -> &Snapshot {
        self.settings.set_worker_count(worker_count);
        self.recompute()
    }

    /// Sets the RAM cap (clamped to at least 128 MB) and recomputes.
    pub fn update_max_ram_mb(&mut self, max_ram_mb: u32) -> &Snapshot {
        self.settings.set_max_ram_mb(max_ram_mb);
        self.recompute()
    }

    /// Enables or disables multiprocess execution and recomputes.
    pub fn update_multiprocess_enabled(&mut self, enabled: bool) -> &Snapshot {
        self.settings.set_multiprocess_enabled(enabled);
        self.recompute()
    }

    /// Runs a full cycle over the current selection and settings, then
    /// publishes it to observers.
    pub fn recompute(&mut self) -> &Snapshot {
        let profile = self.profiler.profile(&self.selected_files);
        self.publish(profile)
    }

    fn publish(&mut self, profile: InputProfilingResult) -> &Snapshot {
        let generation = self.latest.generation + 1;
        self.latest = Self::evaluate(
            &self.estimator,
            &self.recommender,
            self.settings,
            profile,
            generation,
        );
        tracing::debug!(
            generation,
            status = %self.latest.estimate.status(),
            min_mb = self.latest.estimate.min_mb(),
            max_mb = self.latest.estimate.max_mb(),
            "recomputed estimate"
        );

        for observer in &self.observers {
            observer(&self.latest);
        }
        &self.latest
    }

    fn cycle(
        profiler: &InputProfiler<P>,
        estimator: &MemoryEstimator,
        recommender: &PolicyRecommender,
        settings: PerformanceSettings,
        files: &[PathBuf],
        generation: u64,
    ) -> Snapshot {
        let profile = profiler.profile(files);
        Self::evaluate(estimator, recommender, settings, profile, generation)
    }

    fn evaluate(
        estimator: &MemoryEstimator,
        recommender: &PolicyRecommender,
        settings: PerformanceSettings,
        profile: InputProfilingResult,
        generation: u64,
    ) -> Snapshot {
        let input = MemoryEstimateInput::from_settings(&profile, &settings);
        let estimate = estimator.estimate(&input);
        let recommendation = recommender.recommend(&estimate, settings.max_ram_mb());

        Snapshot {
            generation,
            settings,
            profile,
            estimate,
            recommendation,
        }
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for Session<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("settings", &self.settings)
            .field("selected_files", &self.selected_files.len())
            .field("profiler", &self.profiler)
            .field("observers", &self.observers.len())
            .field("latest", &self.latest)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preflight_types::{EstimateStatus, InputFormat};
    use std::io;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    /// Probe that reports every file as unreadable.
    #[derive(Debug, Clone, Copy)]
    struct Unreadable;

    impl SizeProbe for Unreadable {
        fn file_size(&self, _path: &Path) -> io::Result<u64> {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn files(prefix: &str, ext: &str, count: usize) -> Vec<PathBuf> {
        (1..=count)
            .map(|i| PathBuf::from(format!("/tmp/{prefix}{i}.{ext}")))
            .collect()
    }

    fn session(settings: PerformanceSettings) -> Session<Unreadable> {
        Session::with_profiler(settings, Vec::new(), InputProfiler::with_probe(Unreadable))
    }

    #[test]
    fn test_initial_cycle_runs_on_construction() {
        let session = session(PerformanceSettings::default());
        let snapshot = session.latest();

        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.profile.total_files(), 0);
        assert_eq!(snapshot.estimate.status(), EstimateStatus::Safe);
        assert!(snapshot.recommendation.warning_message.is_none());
    }

    #[test]
    fn test_recommends_throttle_and_queue_when_over_cap() {
        let mut session = session(PerformanceSettings::new(ConversionMode::Speed, 500, 8, true));

        let snapshot = session.update_selected_files(files("sample", "pptx", 100));

        assert_eq!(snapshot.profile.format_count(InputFormat::Pptx), 100);
        assert_eq!(snapshot.estimate.status(), EstimateStatus::OverCap);
        assert!(snapshot.should_throttle());
        assert!(snapshot.recommendation.warning_message.is_some());
    }

    #[test]
    fn test_recomputes_when_settings_change() {
        let mut session = session(PerformanceSettings::new(ConversionMode::Power, 1000, 2, true));
        session.update_selected_files(files("input", "docx", 40));
        let baseline_max = session.latest().estimate.max_mb();

        session.update_mode(ConversionMode::Speed);
        session.update_worker_count(6);
        let updated_max = session.latest().estimate.max_mb();

        assert!(updated_max > baseline_max);
        assert_eq!(session.latest().generation, 4);
    }

    #[test]
    fn test_mutations_are_clamped() {
        let mut session = session(PerformanceSettings::default());

        session.update_worker_count(0);
        session.update_max_ram_mb(1);

        assert_eq!(session.settings().worker_count(), 1);
        assert_eq!(session.settings().max_ram_mb(), 128);
        assert_eq!(session.latest().settings, *session.settings());
    }

    #[test]
    fn test_observers_receive_every_cycle() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut session = session(PerformanceSettings::default());

        let sink = Arc::clone(&seen);
        session.subscribe(move |snapshot| {
            sink.lock()
                .unwrap()
                .push((snapshot.generation, snapshot.settings.max_ram_mb()));
        });

        session.update_max_ram_mb(256);
        session.update_multiprocess_enabled(false);
        session.update_selected_files(files("a", "md", 3));

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![(2, 256), (3, 256), (4, 256)]);
    }

    #[test]
    fn test_update_settings_replaces_everything() {
        let mut session = session(PerformanceSettings::default());
        let snapshot = session.update_settings(PerformanceSettings::new(
            ConversionMode::Speed,
            2048,
            12,
            false,
        ));

        assert_eq!(snapshot.settings.mode(), ConversionMode::Speed);
        assert_eq!(snapshot.settings.worker_count(), 12);
        assert!(!snapshot.settings.multiprocess_enabled());
    }

    #[tokio::test]
    async fn test_recompute_concurrent_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let mut selection = Vec::new();
        for (name, len) in [("a.xlsx", 2_000_000), ("b.csv", 50), ("c.html", 30_000_000)] {
            let path = dir.path().join(name);
            std::fs::write(&path, vec![0u8; len]).unwrap();
            selection.push(path);
        }
        selection.push(dir.path().join("missing.json"));

        let mut session = Session::new(PerformanceSettings::default(), selection);
        let sequential = session.latest().clone();
        let concurrent = session.recompute_concurrent(4).await.clone();

        assert_eq!(concurrent.profile, sequential.profile);
        assert_eq!(concurrent.estimate, sequential.estimate);
        assert_eq!(concurrent.generation, sequential.generation + 1);
    }

    #[tokio::test]
    async fn test_update_selected_files_concurrent() {
        let mut session = Session::new(PerformanceSettings::default(), Vec::new());
        let snapshot = session
            .update_selected_files_concurrent(files("nowhere", "yml", 5), 3)
            .await;

        assert_eq!(snapshot.generation, 2);
        assert_eq!(snapshot.profile.format_count(InputFormat::Yaml), 5);
        assert_eq!(
            snapshot.profile.bucket_count(preflight_types::FileSizeBucket::Medium),
            5
        );
        assert_eq!(session.selected_files().len(), 5);
    }
}
