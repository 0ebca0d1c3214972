/// Return the score for having eaten `food_eaten` pieces of food at
/// `points_per_food` points apiece
pub(crate) fn compute_score(food_eaten: i64, points_per_food: u32) -> u32 {
    if food_eaten <= 0 {
        return 0;
    }
    u32::try_from(food_eaten)
        .unwrap_or(u32::MAX)
        .saturating_mul(points_per_food)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::POINTS_PER_FOOD;
    use rstest::rstest;

    #[rstest]
    #[case(-1, POINTS_PER_FOOD, 0)]
    #[case(0, POINTS_PER_FOOD, 0)]
    #[case(1, POINTS_PER_FOOD, 10)]
    #[case(5, POINTS_PER_FOOD, 50)]
    #[case(3, 7, 21)]
    #[case(10, 1, 10)]
    #[case(4, 0, 0)]
    #[case(i64::MAX, POINTS_PER_FOOD, u32::MAX)]
    fn test_compute_score(#[case] food_eaten: i64, #[case] points: u32, #[case] score: u32) {
        assert_eq!(compute_score(food_eaten, points), score);
    }
}
