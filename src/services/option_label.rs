//! 选项标记规整 - 业务能力层
//!
//! 只负责"把选项标记字符规整为标准字母"能力

/// 数字标记到字母标记的映射（"1." 与 "A." 等价）
static DIGIT_LABELS: phf::Map<char, char> = phf::phf_map! {
    '1' => 'A',
    '2' => 'B',
    '3' => 'C',
    '4' => 'D',
};

/// 将选项标记字符规整为大写字母
///
/// 小写字母统一为大写，数字 1-4 映射为 A-D。
/// 规整后的标记只用于识别和剥除选项前缀，不会出现在输出记录里
pub fn normalize_label(label: char) -> char {
    let upper = label.to_ascii_uppercase();
    DIGIT_LABELS.get(&upper).copied().unwrap_or(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_fold_to_uppercase() {
        assert_eq!(normalize_label('a'), 'A');
        assert_eq!(normalize_label('A'), 'A');
        assert_eq!(normalize_label('d'), 'D');
    }

    #[test]
    fn test_digits_map_to_letters() {
        assert_eq!(normalize_label('1'), 'A');
        assert_eq!(normalize_label('2'), 'B');
        assert_eq!(normalize_label('3'), 'C');
        assert_eq!(normalize_label('4'), 'D');
    }

    /// 规整是幂等的：已规整的标记再规整一次不变
    #[test]
    fn test_idempotent() {
        for c in ['a', 'b', 'C', 'D', '1', '4'] {
            let once = normalize_label(c);
            assert_eq!(normalize_label(once), once);
        }
    }
}
