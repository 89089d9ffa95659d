//! Statistics report formatting.

use question_log::QuestionStats;

/// Formats the admin statistics block: header, total, trailing-window count,
/// and one line per category (already count-descending from the repository).
pub fn format_report(stats: &QuestionStats) -> String {
    let mut text = String::from("📊 Статистика НейроНавигатора\n\n");
    text.push_str(&format!("Всего вопросов: {}\n", stats.total));
    text.push_str(&format!("За 7 дней: {}\n\n", stats.last_window));
    text.push_str("Категории:\n");

    for cat in &stats.categories {
        text.push_str(&format!("- {}: {}\n", cat.category, cat.count));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use question_log::CategoryCount;

    /// **Test: report contains header, totals, and category lines in repository order.**
    #[test]
    fn report_format() {
        let stats = QuestionStats {
            total: 3,
            last_window: 3,
            categories: vec![
                CategoryCount {
                    category: "basics".to_string(),
                    count: 2,
                },
                CategoryCount {
                    category: "school".to_string(),
                    count: 1,
                },
            ],
        };

        let report = format_report(&stats);
        assert!(report.starts_with("📊 Статистика НейроНавигатора\n"));
        assert!(report.contains("Всего вопросов: 3"));
        assert!(report.contains("За 7 дней: 3"));

        let basics_pos = report.find("- basics: 2").expect("basics line");
        let school_pos = report.find("- school: 1").expect("school line");
        assert!(basics_pos < school_pos);
    }

    /// **Test: an empty log yields zero counts and no category lines.**
    #[test]
    fn report_empty_log() {
        let stats = QuestionStats {
            total: 0,
            last_window: 0,
            categories: vec![],
        };

        let report = format_report(&stats);
        assert!(report.contains("Всего вопросов: 0"));
        assert!(report.ends_with("Категории:\n"));
    }
}
