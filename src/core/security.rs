use crate::core::report::PlainTextFormatter;
use crate::domain::model::{ReportEntry, SecurityReport};
use crate::domain::ports::{Lockable, ReportFormatter, SharedLockable};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

/// Tracks lockable items independently of the house or car they belong to
/// and reports on their lock state.
pub struct SecurityService {
    report_name: String,
    lockables: Vec<SharedLockable>,
    formatter: Box<dyn ReportFormatter>,
}

impl SecurityService {
    pub fn new(report_name: impl Into<String>) -> Result<Self> {
        Self::with_formatter(report_name, Box::new(PlainTextFormatter))
    }

    pub fn with_formatter(
        report_name: impl Into<String>,
        formatter: Box<dyn ReportFormatter>,
    ) -> Result<Self> {
        let report_name = report_name.into();
        validate_non_empty_string("report_name", &report_name)?;

        Ok(Self {
            report_name,
            lockables: Vec::new(),
            formatter,
        })
    }

    pub fn report_name(&self) -> &str {
        &self.report_name
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn ReportFormatter>) {
        self.formatter = formatter;
    }

    /// Appends items in the given order. Duplicates are kept.
    pub fn add_lockables<I>(&mut self, lockables: I)
    where
        I: IntoIterator<Item = SharedLockable>,
    {
        let before = self.lockables.len();
        self.lockables.extend(lockables);
        tracing::debug!(
            "Report '{}' tracks {} item(s) (+{})",
            self.report_name,
            self.lockables.len(),
            self.lockables.len() - before
        );
    }

    pub fn len(&self) -> usize {
        self.lockables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lockables.is_empty()
    }

    /// Reads every tracked item's state without changing it.
    pub fn evaluate(&self) -> SecurityReport {
        let entries = self
            .lockables
            .iter()
            .enumerate()
            .map(|(i, item)| ReportEntry {
                position: i + 1,
                kind: item.kind(),
                locked: item.is_locked(),
            })
            .collect();

        let report = SecurityReport::new(self.report_name.clone(), entries);
        tracing::info!(
            "🔍 Evaluated '{}': {:?}, {} of {} unlocked",
            report.report_name,
            report.status,
            report.unlocked_count(),
            report.total()
        );
        report
    }

    pub fn unlocked(&self) -> Vec<ReportEntry> {
        self.evaluate().unlocked().cloned().collect()
    }

    pub fn check_security(&self) -> String {
        self.formatter.format(&self.evaluate())
    }

    pub fn lock_all(&self) {
        for item in &self.lockables {
            item.lock();
        }
        tracing::info!(
            "🔒 Locked all {} item(s) tracked by '{}'",
            self.lockables.len(),
            self.report_name
        );
    }
}

impl std::fmt::Debug for SecurityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityService")
            .field("report_name", &self.report_name)
            .field("tracked", &self.lockables.len())
            .finish()
    }
}
