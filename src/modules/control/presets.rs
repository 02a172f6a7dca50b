use crate::modules::threshold::ColorRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
	pub name: &'static str,
	pub key: char,
	pub range: ColorRange,
}

/// Keys '1' to '6' (codes 49 to 54), bounds in BGR channel order.
pub const PRESETS: [Preset; 6] = [
	Preset { name: "Red", key: '1', range: ColorRange::from_bounds([0, 94, 0, 36, 150, 255]) },
	Preset { name: "Green", key: '2', range: ColorRange::from_bounds([0, 22, 232, 255, 0, 45]) },
	Preset { name: "Blue", key: '3', range: ColorRange::from_bounds([164, 255, 0, 31, 0, 45]) },
	Preset { name: "Magenta", key: '4', range: ColorRange::from_bounds([173, 255, 0, 255, 227, 255]) },
	Preset { name: "Cyan", key: '5', range: ColorRange::from_bounds([177, 255, 58, 255, 0, 255]) },
	Preset { name: "Yellow", key: '6', range: ColorRange::from_bounds([0, 255, 204, 255, 90, 255]) },
];

impl Preset {
	pub fn for_key(key: char) -> Option<&'static Preset> {
		PRESETS.iter().find(|p| p.key == key)
	}
}
