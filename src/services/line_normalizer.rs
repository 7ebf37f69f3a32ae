//! 行规整服务 - 业务能力层
//!
//! 只负责"把页文本变成干净行序列"能力，不关心解析流程

/// 将各页文本合并为规整后的行序列
///
/// 每行去除首尾空白，规整后为空的行被丢弃；页边界不保留，
/// 所有页的行按原始顺序拼成一个序列
pub fn normalize_lines(pages: &[String]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|page| page.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let pages = vec!["  Câu 1: abc  \n\n   \n A. xyz\t".to_string()];
        assert_eq!(normalize_lines(&pages), vec!["Câu 1: abc", "A. xyz"]);
    }

    #[test]
    fn test_page_boundary_not_preserved() {
        let pages = vec!["dòng một\ndòng hai".to_string(), "dòng ba".to_string()];
        assert_eq!(normalize_lines(&pages), vec!["dòng một", "dòng hai", "dòng ba"]);
    }

    #[test]
    fn test_image_only_page_yields_nothing() {
        let pages = vec![String::new(), "nội dung".to_string(), String::new()];
        assert_eq!(normalize_lines(&pages), vec!["nội dung"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_lines(&[]).is_empty());
    }
}
