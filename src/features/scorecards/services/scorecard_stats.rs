use crate::features::hole_stats::dtos::HoleStatsDetailDto;
use crate::features::scorecards::dtos::ScorecardStatsDto;
use crate::features::shots::models::ShotDirection;

/// Aggregate the per-hole statistics of one round.
///
/// Boolean columns count `true` values and missing penalty strokes count
/// as zero. Tee-shot directions only come from the first shot on holes
/// that are not par 3 on the scorecard's tee; a hole without a recorded
/// par is treated as not being a par 3.
pub fn compute_stats(holes: &[HoleStatsDetailDto]) -> ScorecardStatsDto {
    let mut stats = ScorecardStatsDto::default();

    for hole in holes {
        stats.putts += i64::from(hole.putts);
        stats.penalty_strokes += i64::from(hole.penalty_strokes.unwrap_or(0));

        if hole.fairway_hit {
            stats.fairway_hit += 1;
        }
        if hole.green_in_regulation {
            stats.green_in_regulation += 1;
        }
        if hole.sand_save == Some(true) {
            stats.sand_save += 1;
        }
        if hole.up_and_down == Some(true) {
            stats.up_and_down += 1;
        }

        if hole.par == Some(3) {
            continue;
        }

        for shot in hole.shots.iter().filter(|s| s.shot_number == 1) {
            match shot.left_middle_right {
                Some(ShotDirection::Left) => stats.left_tee_shots += 1,
                Some(ShotDirection::Middle) => stats.middle_tee_shots += 1,
                Some(ShotDirection::Right) => stats.right_tee_shots += 1,
                None => {}
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shots::dtos::ShotDetailDto;

    fn shot(number: i32, direction: Option<ShotDirection>) -> ShotDetailDto {
        ShotDetailDto {
            shot_id: i64::from(number),
            shot_number: number,
            club_id: None,
            club_name: None,
            type_of_shot_id: None,
            left_middle_right: direction,
            short_center_long: None,
            in_hole: false,
            location_start: None,
            location_end: None,
        }
    }

    fn hole(par: Option<i32>, shots: Vec<ShotDetailDto>) -> HoleStatsDetailDto {
        HoleStatsDetailDto {
            hole_stats_id: 1,
            scorecard_id: 1,
            hole_id: 1,
            hole_number: 1,
            par,
            score: 4,
            fairway_hit: false,
            green_in_regulation: false,
            putts: 2,
            penalty_strokes: None,
            sand_save: None,
            up_and_down: None,
            shots,
        }
    }

    #[test]
    fn test_empty_round() {
        assert_eq!(compute_stats(&[]), ScorecardStatsDto::default());
    }

    #[test]
    fn test_counts_true_flags_and_sums() {
        let mut first = hole(Some(4), vec![]);
        first.fairway_hit = true;
        first.green_in_regulation = true;
        first.penalty_strokes = Some(2);
        first.sand_save = Some(false);
        first.up_and_down = Some(true);

        let mut second = hole(Some(5), vec![]);
        second.putts = 3;
        second.fairway_hit = true;
        second.sand_save = Some(true);

        let stats = compute_stats(&[first, second]);

        assert_eq!(stats.putts, 5);
        assert_eq!(stats.fairway_hit, 2);
        assert_eq!(stats.green_in_regulation, 1);
        assert_eq!(stats.penalty_strokes, 2);
        assert_eq!(stats.sand_save, 1);
        assert_eq!(stats.up_and_down, 1);
    }

    #[test]
    fn test_tee_shots_only_count_first_shot() {
        let holes = [hole(
            Some(4),
            vec![
                shot(1, Some(ShotDirection::Left)),
                shot(2, Some(ShotDirection::Right)),
                shot(3, Some(ShotDirection::Right)),
            ],
        )];

        let stats = compute_stats(&holes);
        assert_eq!(stats.left_tee_shots, 1);
        assert_eq!(stats.right_tee_shots, 0);
    }

    #[test]
    fn test_par_three_tee_shots_are_ignored() {
        let holes = [
            hole(Some(3), vec![shot(1, Some(ShotDirection::Middle))]),
            hole(Some(5), vec![shot(1, Some(ShotDirection::Middle))]),
        ];

        assert_eq!(compute_stats(&holes).middle_tee_shots, 1);
    }

    #[test]
    fn test_unknown_par_counts_tee_shot() {
        let holes = [hole(None, vec![shot(1, Some(ShotDirection::Right))])];
        assert_eq!(compute_stats(&holes).right_tee_shots, 1);
    }

    #[test]
    fn test_first_shot_without_direction_is_skipped() {
        let holes = [hole(Some(4), vec![shot(1, None)])];
        let stats = compute_stats(&holes);
        assert_eq!(
            stats.left_tee_shots + stats.middle_tee_shots + stats.right_tee_shots,
            0
        );
    }
}
