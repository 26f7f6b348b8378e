use shared_types::{Absence, ClassStatistic, Classe};

/// Absences of one class, in the order the server returned them.
pub fn absences_for_class(all: &[Absence], classe: Classe) -> Vec<Absence> {
    all.iter().filter(|a| a.classe == classe).cloned().collect()
}

/// School-wide sums shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardTotals {
    pub total: i64,
    pub unjustified: i64,
    pub recent: i64,
}

impl DashboardTotals {
    pub fn from_stats(stats: &[ClassStatistic]) -> Self {
        stats.iter().fold(Self::default(), |acc, s| Self {
            total: acc.total + s.total_absences,
            unjustified: acc.unjustified + s.absences_non_justifiees,
            recent: acc.recent + s.absences_recentes,
        })
    }
}
