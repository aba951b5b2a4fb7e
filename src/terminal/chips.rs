//! Placement of divisor chips inside the results area.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

const CHIP_GAP: u16 = 1;

/// One chip and the cells it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChipSlot {
	pub divisor: u64,
	pub area: Rect,
}

pub(crate) fn chip_label(divisor: u64) -> String {
	format!(" {divisor} ")
}

/// Lay chips out left to right, wrapping onto new rows. Chips that do not fit
/// in `area` are dropped.
pub(crate) fn layout_chips(divisors: &[u64], area: Rect) -> Vec<ChipSlot> {
	let mut slots = Vec::with_capacity(divisors.len());
	let mut x = area.x;
	let mut y = area.y;

	for &divisor in divisors {
		let width = (chip_label(divisor).width() as u16).min(area.width);
		if x > area.x && x.saturating_add(width) > area.right() {
			x = area.x;
			y = y.saturating_add(1);
		}
		if y >= area.bottom() || width == 0 {
			break;
		}
		slots.push(ChipSlot {
			divisor,
			area: Rect::new(x, y, width, 1),
		});
		x = x.saturating_add(width).saturating_add(CHIP_GAP);
	}

	slots
}

/// Number of rows the chips need at `width`.
pub(crate) fn rows_needed(divisors: &[u64], width: u16) -> u16 {
	if divisors.is_empty() {
		return 0;
	}
	let area = Rect::new(0, 0, width, u16::MAX);
	layout_chips(divisors, area)
		.last()
		.map(|slot| slot.area.y + 1)
		.unwrap_or(0)
}

/// Whether the cell at (`column`, `row`) lies inside `area`.
pub(crate) fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn chips_flow_left_to_right() {
		let slots = layout_chips(&[1, 2, 12], Rect::new(0, 0, 40, 2));
		let xs: Vec<u16> = slots.iter().map(|slot| slot.area.x).collect();
		assert_eq!(xs, vec![0, 4, 8]);
		assert_eq!(slots[2].area.width, 4);
	}

	#[test]
	fn chips_wrap_when_the_row_is_full() {
		let slots = layout_chips(&[1, 2, 3, 4], Rect::new(0, 0, 8, 3));
		let rows: Vec<u16> = slots.iter().map(|slot| slot.area.y).collect();
		assert_eq!(rows, vec![0, 0, 1, 1]);
		assert_eq!(rows_needed(&[1, 2, 3, 4], 8), 2);
	}

	#[test]
	fn overflowing_chips_are_dropped() {
		let slots = layout_chips(&[1, 2, 3, 4], Rect::new(0, 0, 8, 1));
		assert_eq!(slots.len(), 2);
	}

	#[test]
	fn no_divisors_need_no_rows() {
		assert_eq!(rows_needed(&[], 20), 0);
	}

	#[test]
	fn hit_testing_respects_bounds() {
		let area = Rect::new(2, 3, 4, 1);
		assert!(point_in_rect(2, 3, area));
		assert!(point_in_rect(5, 3, area));
		assert!(!point_in_rect(6, 3, area));
		assert!(!point_in_rect(2, 4, area));
	}
}
