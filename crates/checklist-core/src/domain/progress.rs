//! Completion progress derived from a snapshot.

use super::item::ChecklistItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    /// 0..=100, rounded half up
    pub percent: u32,
}

impl Progress {
    pub fn of(items: &[ChecklistItem]) -> Self {
        let total = items.len();
        let done = items.iter().filter(|i| i.checked).count();
        let percent = if total == 0 {
            0
        } else {
            (done as f64 / total as f64 * 100.0).round() as u32
        };
        Self { done, total, percent }
    }

    /// Text shown under the progress bar
    pub fn label(&self) -> String {
        format!("完了率: {}%（{}/{}）", self.percent, self.done, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(checked: &[bool]) -> Vec<ChecklistItem> {
        checked
            .iter()
            .enumerate()
            .map(|(i, c)| ChecklistItem::with_checked(format!("Item {}", i), *c))
            .collect()
    }

    #[test]
    fn test_two_of_five() {
        let p = Progress::of(&items(&[true, false, true, false, false]));
        assert_eq!(p, Progress { done: 2, total: 5, percent: 40 });
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(Progress::of(&[]).percent, 0);
    }

    #[test]
    fn test_rounding() {
        // 1/3 -> 33, 2/3 -> 67, 1/8 -> 12.5 -> 13
        assert_eq!(Progress::of(&items(&[true, false, false])).percent, 33);
        assert_eq!(Progress::of(&items(&[true, true, false])).percent, 67);
        let mut eighth = vec![false; 8];
        eighth[0] = true;
        assert_eq!(Progress::of(&items(&eighth)).percent, 13);
    }

    #[test]
    fn test_label() {
        let p = Progress::of(&items(&[true, false]));
        assert_eq!(p.label(), "完了率: 50%（1/2）");
    }
}
