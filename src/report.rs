use colored::Colorize;

use crate::recommend::Recommendation;

/// Renders a ranked list for the terminal, or a notice when nothing matched
pub fn format_recommendations(title: &str, recommendations: &[Recommendation]) -> String {
    let mut out = format!("{}\n", format!("=== {title} ===").cyan().bold());

    if recommendations.is_empty() {
        out.push_str(&format!("  {}\n", "No recommendations found.".yellow()));
        return out;
    }

    let width = recommendations
        .iter()
        .map(|r| r.game.chars().count())
        .max()
        .unwrap_or(0);

    for (rank, recommendation) in recommendations.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {:<width$}  {:.4}\n",
            rank + 1,
            recommendation.game.white().bold(),
            recommendation.score,
            width = width
        ));
    }
    out
}

pub fn print_recommendations(title: &str, recommendations: &[Recommendation]) {
    print!("{}", format_recommendations(title, recommendations));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lists_games_in_rank_order() {
        let recommendations = vec![
            Recommendation { game: "Halo 3".to_string(), score: 0.98765 },
            Recommendation { game: "Gears".to_string(), score: 0.5 },
        ];

        let out = format_recommendations("Similar to Halo 2", &recommendations);

        let halo = out.find("Halo 3").unwrap();
        let gears = out.find("Gears").unwrap();
        assert!(halo < gears);
        assert!(out.contains("0.9877"));
        assert!(out.contains("0.5000"));
    }

    #[test]
    fn test_format_empty_list() {
        let out = format_recommendations("Similar to Nothing", &[]);

        assert!(out.contains("No recommendations found."));
    }
}
