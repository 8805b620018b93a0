use rand::seq::SliceRandom;
use rand::Rng;

use super::ProgressMap;
use crate::models::{Difficulty, DsaSheet, Question};
use crate::utils::percent;

/// Completion counts derived from a sheet and a progress mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    /// Questions in the sheet.
    pub total: usize,
    /// Completed questions of any difficulty.
    pub completed: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl ProgressStats {
    pub fn completed_for(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn percent_complete(&self) -> f64 {
        percent(self.completed, self.total)
    }
}

/// Count completed questions overall and per tier. Difficulty labels are
/// matched ignoring case; questions with other labels only count toward
/// `completed`.
pub fn progress_stats(sheet: &DsaSheet, progress: &ProgressMap) -> ProgressStats {
    sheet
        .questions()
        .fold(ProgressStats::default(), |mut stats, question| {
            stats.total += 1;
            let done = progress.get(&question.id).is_some_and(|r| r.completed);
            if done {
                stats.completed += 1;
                match question.difficulty_tier() {
                    Some(Difficulty::Easy) => stats.easy += 1,
                    Some(Difficulty::Medium) => stats.medium += 1,
                    Some(Difficulty::Hard) => stats.hard += 1,
                    None => {}
                }
            }
            stats
        })
}

/// A random question from `sheet` that is not yet completed.
pub fn pick_random<'a, R: Rng + ?Sized>(
    sheet: &'a DsaSheet,
    progress: &ProgressMap,
    rng: &mut R,
) -> Option<&'a Question> {
    let open: Vec<&Question> = sheet
        .questions()
        .filter(|q| !progress.get(&q.id).is_some_and(|r| r.completed))
        .collect();
    open.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::dsa::fixtures::sheet;
    use crate::progress::ProgressRecord;

    fn done(ids: &[u64]) -> ProgressMap {
        ids.iter()
            .map(|&id| {
                (
                    id,
                    ProgressRecord {
                        completed: true,
                        starred: false,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_counts_per_tier() {
        // 1, 2, 4 easy; 3 Hard
        let stats = progress_stats(&sheet(), &done(&[1, 2, 3, 4]));
        assert_eq!(
            stats,
            ProgressStats {
                total: 6,
                completed: 4,
                easy: 3,
                medium: 0,
                hard: 1,
            }
        );
        assert_eq!(stats.completed_for(Difficulty::Hard), 1);
    }

    #[test]
    fn test_lowercase_label_counts() {
        let stats = progress_stats(&sheet(), &done(&[6]));
        assert_eq!(stats.hard, 1);
    }

    #[test]
    fn test_starred_only_not_completed() {
        let mut progress = ProgressMap::new();
        progress.insert(
            5,
            ProgressRecord {
                completed: false,
                starred: true,
            },
        );
        assert_eq!(progress_stats(&sheet(), &progress).completed, 0);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let stats = progress_stats(&sheet(), &done(&[99]));
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.percent_complete(), 0.0);
    }

    #[test]
    fn test_empty_sheet_percent_is_zero() {
        let stats = progress_stats(&DsaSheet::default(), &ProgressMap::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percent_complete(), 0.0);
    }

    #[test]
    fn test_pick_random_skips_completed() {
        let sheet = sheet();
        let progress = done(&[1, 2, 3, 4, 5]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(pick_random(&sheet, &progress, &mut rng).unwrap().id, 6);
        }
    }

    #[test]
    fn test_pick_random_none_when_all_done() {
        let sheet = sheet();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random(&sheet, &done(&[1, 2, 3, 4, 5, 6]), &mut rng).is_none());
    }
}
