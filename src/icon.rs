use std::fmt;

/// Icon names in the order the device indexes them.
pub const ICON_NAMES: [&str; 9] = [
    "star",
    "home",
    "checkpoint",
    "car",
    "cafe",
    "train",
    "gas",
    "office",
    "airport",
];

/// Symbol the device shows for a POI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Icon {
    #[default]
    Star = 0,
    Home = 1,
    Checkpoint = 2,
    Car = 3,
    Cafe = 4,
    Train = 5,
    Gas = 6,
    Office = 7,
    Airport = 8,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::Star,
        Icon::Home,
        Icon::Checkpoint,
        Icon::Car,
        Icon::Cafe,
        Icon::Train,
        Icon::Gas,
        Icon::Office,
        Icon::Airport,
    ];

    /// Returns the icon stored under `index`, or `None` if the device knows
    /// no such icon.
    pub fn from_index(index: u8) -> Option<Icon> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        ICON_NAMES[self as usize]
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
