//! Report rendering.
//!
//! Produces the output lines only; printing them is the caller's concern.

use crate::tally::Tally;

/// Render the summary report.
///
/// Lines in order: header, one line per category (lexicographic), a blank
/// separator, total question and category counts, another separator, then
/// the categories whose count falls strictly below `threshold`.
pub fn render(tally: &Tally, threshold: u64) -> Vec<String> {
    let mut lines = Vec::with_capacity(tally.distinct() + 6);

    lines.push("分类题目数量统计：".to_string());
    for (label, count) in tally.iter() {
        lines.push(format!("{}: {}题", label, count));
    }

    lines.push(String::new());
    lines.push(format!("总题目数: {}", tally.total()));
    lines.push(format!("总分类数: {}", tally.distinct()));

    lines.push(String::new());
    lines.push(format!(
        "不足{}题的分类: {:?}",
        threshold,
        tally.insufficient(threshold)
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tally::DEFAULT_THRESHOLD;

    #[test]
    fn render_sorted_report() {
        let tally = Tally::from_labels(["B", "A", "A"]);
        let lines = render(&tally, DEFAULT_THRESHOLD);
        assert_eq!(
            lines,
            [
                "分类题目数量统计：",
                "A: 2题",
                "B: 1题",
                "",
                "总题目数: 3",
                "总分类数: 2",
                "",
                r#"不足15题的分类: ["A", "B"]"#,
            ]
        );
    }

    #[test]
    fn render_empty_tally() {
        let tally = Tally::default();
        let lines = render(&tally, DEFAULT_THRESHOLD);
        assert_eq!(
            lines,
            [
                "分类题目数量统计：",
                "",
                "总题目数: 0",
                "总分类数: 0",
                "",
                "不足15题的分类: []",
            ]
        );
    }

    #[test]
    fn render_boundary_at_threshold() {
        let tally = Tally::from_labels(std::iter::repeat("言语理解").take(15));
        let lines = render(&tally, DEFAULT_THRESHOLD);
        assert!(lines.contains(&"言语理解: 15题".to_string()));
        assert!(lines.contains(&"不足15题的分类: []".to_string()));
    }

    #[test]
    fn render_interpolates_threshold() {
        let tally = Tally::from_labels(["A", "A", "B"]);
        let lines = render(&tally, 2);
        assert_eq!(lines.last().unwrap(), r#"不足2题的分类: ["B"]"#);
    }

    #[test]
    fn label_lines_match_distinct_count() {
        let tally = Tally::from_labels(["资料分析", "常识判断", "资料分析"]);
        let lines = render(&tally, DEFAULT_THRESHOLD);
        let label_lines = lines.iter().filter(|line| line.ends_with('题')).count();
        assert_eq!(label_lines, tally.distinct());
    }

    #[test]
    fn render_keeps_cjk_labels_unescaped() {
        let tally = Tally::from_labels(["数量关系"]);
        let lines = render(&tally, DEFAULT_THRESHOLD);
        assert_eq!(lines.last().unwrap(), r#"不足15题的分类: ["数量关系"]"#);
    }
}
