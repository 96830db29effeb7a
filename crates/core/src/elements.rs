//! Element table and lookup.
//!
//! The table is a plain static literal indexed by `atomic_number - 1`; there is
//! exactly one shape of element so no trait objects are involved.

use std::borrow::Cow;

use crate::types::MAX_ATOMIC_NUMBER;

/// A chemical element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub atomic_mass: f64,
    pub category: Cow<'static, str>,
}

impl Element {
    /// Neutron count of the most common isotope, estimated as
    /// `round(atomic_mass) - atomic_number`.
    pub fn neutrons(&self) -> i64 {
        self.atomic_mass.round() as i64 - self.atomic_number as i64
    }

    /// Atomic mass as printed to the user: integral masses keep one decimal
    /// (`145.0`), the rest print in shortest form (`20.18`).
    pub fn mass_label(&self) -> String {
        if self.atomic_mass.fract() == 0.0 {
            format!("{:.1}", self.atomic_mass)
        } else {
            format!("{}", self.atomic_mass)
        }
    }

    /// "Name (Symbol)" title used in headers and footers.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }

    /// True when the element comes from the curated table.
    pub fn is_known(&self) -> bool {
        (1..=MAX_ATOMIC_NUMBER).contains(&self.atomic_number)
    }
}

/// (symbol, name, atomic mass, category), indexed by `atomic_number - 1`.
static ELEMENTS: [(&str, &str, f64, &str); MAX_ATOMIC_NUMBER as usize] = [
    // Period 1
    ("H", "Hydrogen", 1.008, "Nonmetal"),
    ("He", "Helium", 4.003, "Noble Gas"),

    // Period 2
    ("Li", "Lithium", 6.941, "Alkali Metal"),
    ("Be", "Beryllium", 9.012, "Alkaline Earth"),
    ("B", "Boron", 10.811, "Metalloid"),
    ("C", "Carbon", 12.011, "Nonmetal"),
    ("N", "Nitrogen", 14.007, "Nonmetal"),
    ("O", "Oxygen", 15.999, "Nonmetal"),
    ("F", "Fluorine", 18.998, "Halogen"),
    ("Ne", "Neon", 20.180, "Noble Gas"),

    // Period 3
    ("Na", "Sodium", 22.990, "Alkali Metal"),
    ("Mg", "Magnesium", 24.305, "Alkaline Earth"),
    ("Al", "Aluminum", 26.982, "Metal"),
    ("Si", "Silicon", 28.086, "Metalloid"),
    ("P", "Phosphorus", 30.974, "Nonmetal"),
    ("S", "Sulfur", 32.065, "Nonmetal"),
    ("Cl", "Chlorine", 35.453, "Halogen"),
    ("Ar", "Argon", 39.948, "Noble Gas"),

    // Period 4
    ("K", "Potassium", 39.098, "Alkali Metal"),
    ("Ca", "Calcium", 40.078, "Alkaline Earth"),
    ("Sc", "Scandium", 44.956, "Transition Metal"),
    ("Ti", "Titanium", 47.867, "Transition Metal"),
    ("V", "Vanadium", 50.942, "Transition Metal"),
    ("Cr", "Chromium", 51.996, "Transition Metal"),
    ("Mn", "Manganese", 54.938, "Transition Metal"),
    ("Fe", "Iron", 55.845, "Transition Metal"),
    ("Co", "Cobalt", 58.933, "Transition Metal"),
    ("Ni", "Nickel", 58.693, "Transition Metal"),
    ("Cu", "Copper", 63.546, "Transition Metal"),
    ("Zn", "Zinc", 65.38, "Transition Metal"),
    ("Ga", "Gallium", 69.723, "Metal"),
    ("Ge", "Germanium", 72.630, "Metalloid"),
    ("As", "Arsenic", 74.922, "Metalloid"),
    ("Se", "Selenium", 78.971, "Nonmetal"),
    ("Br", "Bromine", 79.904, "Halogen"),
    ("Kr", "Krypton", 83.798, "Noble Gas"),

    // Period 5
    ("Rb", "Rubidium", 85.468, "Alkali Metal"),
    ("Sr", "Strontium", 87.62, "Alkaline Earth"),
    ("Y", "Yttrium", 88.906, "Transition Metal"),
    ("Zr", "Zirconium", 91.224, "Transition Metal"),
    ("Nb", "Niobium", 92.906, "Transition Metal"),
    ("Mo", "Molybdenum", 95.95, "Transition Metal"),
    ("Tc", "Technetium", 98.907, "Transition Metal"),
    ("Ru", "Ruthenium", 101.07, "Transition Metal"),
    ("Rh", "Rhodium", 102.906, "Transition Metal"),
    ("Pd", "Palladium", 106.42, "Transition Metal"),
    ("Ag", "Silver", 107.868, "Transition Metal"),
    ("Cd", "Cadmium", 112.414, "Transition Metal"),
    ("In", "Indium", 114.818, "Metal"),
    ("Sn", "Tin", 118.710, "Metal"),
    ("Sb", "Antimony", 121.760, "Metalloid"),
    ("Te", "Tellurium", 127.60, "Metalloid"),
    ("I", "Iodine", 126.904, "Halogen"),
    ("Xe", "Xenon", 131.294, "Noble Gas"),

    // Period 6
    ("Cs", "Cesium", 132.905, "Alkali Metal"),
    ("Ba", "Barium", 137.327, "Alkaline Earth"),
    ("La", "Lanthanum", 138.905, "Lanthanide"),
    ("Ce", "Cerium", 140.116, "Lanthanide"),
    ("Pr", "Praseodymium", 140.908, "Lanthanide"),
    ("Nd", "Neodymium", 144.242, "Lanthanide"),
    ("Pm", "Promethium", 145.0, "Lanthanide"),
    ("Sm", "Samarium", 150.36, "Lanthanide"),
    ("Eu", "Europium", 151.964, "Lanthanide"),
    ("Gd", "Gadolinium", 157.25, "Lanthanide"),
    ("Tb", "Terbium", 158.925, "Lanthanide"),
    ("Dy", "Dysprosium", 162.500, "Lanthanide"),
    ("Ho", "Holmium", 164.930, "Lanthanide"),
    ("Er", "Erbium", 167.259, "Lanthanide"),
    ("Tm", "Thulium", 168.934, "Lanthanide"),
    ("Yb", "Ytterbium", 173.045, "Lanthanide"),
    ("Lu", "Lutetium", 174.967, "Lanthanide"),
    ("Hf", "Hafnium", 178.49, "Transition Metal"),
    ("Ta", "Tantalum", 180.948, "Transition Metal"),
    ("W", "Tungsten", 183.84, "Transition Metal"),
    ("Re", "Rhenium", 186.207, "Transition Metal"),
    ("Os", "Osmium", 190.23, "Transition Metal"),
    ("Ir", "Iridium", 192.217, "Transition Metal"),
    ("Pt", "Platinum", 195.084, "Transition Metal"),
    ("Au", "Gold", 196.967, "Transition Metal"),
    ("Hg", "Mercury", 200.592, "Transition Metal"),
    ("Tl", "Thallium", 204.383, "Metal"),
    ("Pb", "Lead", 207.2, "Metal"),
    ("Bi", "Bismuth", 208.980, "Metal"),
    ("Po", "Polonium", 209.0, "Metalloid"),
    ("At", "Astatine", 210.0, "Halogen"),
    ("Rn", "Radon", 222.0, "Noble Gas"),

    // Period 7
    ("Fr", "Francium", 223.0, "Alkali Metal"),
    ("Ra", "Radium", 226.0, "Alkaline Earth"),
    ("Ac", "Actinium", 227.0, "Actinide"),
    ("Th", "Thorium", 232.038, "Actinide"),
    ("Pa", "Protactinium", 231.036, "Actinide"),
    ("U", "Uranium", 238.029, "Actinide"),
    ("Np", "Neptunium", 237.0, "Actinide"),
    ("Pu", "Plutonium", 244.0, "Actinide"),
    ("Am", "Americium", 243.0, "Actinide"),
    ("Cm", "Curium", 247.0, "Actinide"),
    ("Bk", "Berkelium", 247.0, "Actinide"),
    ("Cf", "Californium", 251.0, "Actinide"),
    ("Es", "Einsteinium", 252.0, "Actinide"),
    ("Fm", "Fermium", 257.0, "Actinide"),
    ("Md", "Mendelevium", 258.0, "Actinide"),
    ("No", "Nobelium", 259.0, "Actinide"),
    ("Lr", "Lawrencium", 266.0, "Actinide"),
    ("Rf", "Rutherfordium", 267.0, "Transition Metal"),
    ("Db", "Dubnium", 268.0, "Transition Metal"),
    ("Sg", "Seaborgium", 269.0, "Transition Metal"),
    ("Bh", "Bohrium", 270.0, "Transition Metal"),
    ("Hs", "Hassium", 269.0, "Transition Metal"),
    ("Mt", "Meitnerium", 278.0, "Transition Metal"),
    ("Ds", "Darmstadtium", 281.0, "Transition Metal"),
    ("Rg", "Roentgenium", 282.0, "Transition Metal"),
    ("Cn", "Copernicium", 285.0, "Transition Metal"),
    ("Nh", "Nihonium", 286.0, "Metal"),
    ("Fl", "Flerovium", 289.0, "Metal"),
    ("Mc", "Moscovium", 290.0, "Metal"),
    ("Lv", "Livermorium", 293.0, "Metal"),
    ("Ts", "Tennessine", 294.0, "Halogen"),
    ("Og", "Oganesson", 294.0, "Noble Gas"),
];

/// Elements highlighted by the interactive menu, grouped by theme.
pub const POPULAR_ELEMENTS: [(&str, [u32; 4]); 6] = [
    ("Light Elements", [1, 2, 3, 4]),
    ("Life Elements", [6, 7, 8, 9]),
    ("Noble Gases", [10, 18, 36, 54]),
    ("Common Metals", [11, 12, 13, 26]),
    ("Precious Metals", [29, 47, 78, 79]),
    ("Heavy Elements", [82, 92, 94, 118]),
];

/// Look up an element by atomic number.
///
/// Never fails: numbers outside the table get a placeholder with a generated
/// symbol and name and a rough mass estimate of `2 * Z`.
///
/// ```
/// use tui_atom_core::lookup;
///
/// assert_eq!(lookup(79).name, "Gold");
/// assert_eq!(lookup(130).symbol, "E130");
/// ```
pub fn lookup(atomic_number: u32) -> Element {
    let row = (atomic_number as usize)
        .checked_sub(1)
        .and_then(|idx| ELEMENTS.get(idx));

    match row {
        Some(&(symbol, name, atomic_mass, category)) => Element {
            atomic_number,
            symbol: Cow::Borrowed(symbol),
            name: Cow::Borrowed(name),
            atomic_mass,
            category: Cow::Borrowed(category),
        },
        None => Element {
            atomic_number,
            symbol: Cow::Owned(format!("E{}", atomic_number)),
            name: Cow::Owned(format!("Element-{}", atomic_number)),
            atomic_mass: atomic_number as f64 * 2.0,
            category: Cow::Borrowed("Unknown"),
        },
    }
}
