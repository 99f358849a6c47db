use std::fmt;
use strum_macros::EnumIter;

/*
== Colours available for particles and connective lines ========================
*/

// Dropdown in the UI will be automatically populated with these options
#[derive(Debug, Default, PartialEq, Clone, Copy, EnumIter)]
pub enum Palette {
    #[default]
    Indigo,
    Teal,
    Amber,
    Rose,
}

impl Palette {
    pub fn properties(&self) -> PaletteProperties {
        match self {
            Palette::Indigo => PaletteProperties {
                name: "Indigo",
                colour: (99, 102, 241),
            },
            Palette::Teal => PaletteProperties {
                name: "Teal",
                colour: (20, 184, 166),
            },
            Palette::Amber => PaletteProperties {
                name: "Amber",
                colour: (255, 175, 0),
            },
            Palette::Rose => PaletteProperties {
                name: "Rose",
                colour: (244, 63, 94),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.properties().name
    }

    pub fn colour(&self) -> (u8, u8, u8) {
        self.properties().colour
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub struct PaletteProperties {
    pub name: &'static str,
    pub colour: (u8, u8, u8), // RGB
}
