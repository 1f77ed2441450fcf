//! Pokemon types and the built-in effectiveness chart

/// The 18 types of the modern games, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

use Type::*;

const NAMES: [(Type, &str); Type::COUNT] = [
    (Normal, "Normal"),
    (Fire, "Fire"),
    (Water, "Water"),
    (Electric, "Electric"),
    (Grass, "Grass"),
    (Ice, "Ice"),
    (Fighting, "Fighting"),
    (Poison, "Poison"),
    (Ground, "Ground"),
    (Flying, "Flying"),
    (Psychic, "Psychic"),
    (Bug, "Bug"),
    (Rock, "Rock"),
    (Ghost, "Ghost"),
    (Dragon, "Dragon"),
    (Dark, "Dark"),
    (Steel, "Steel"),
    (Fairy, "Fairy"),
];

impl Type {
    pub const COUNT: usize = 18;

    pub const ALL: [Type; Type::COUNT] = {
        let mut all = [Normal; Type::COUNT];
        let mut i = 0;
        while i < Type::COUNT {
            all[i] = NAMES[i].0;
            i += 1;
        }
        all
    };

    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Position of this type in [`Type::ALL`] and [`TYPE_CHART`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a dataset label (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(ty, _)| *ty)
    }

    pub fn as_str(&self) -> &'static str {
        NAMES[self.index()].1
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-neutral matchups of one attacking type
struct Matchups {
    attacking: Type,
    double: &'static [Type],
    half: &'static [Type],
    immune: &'static [Type],
}

#[rustfmt::skip]
const MATCHUPS: [Matchups; Type::COUNT] = [
    Matchups { attacking: Normal,   double: &[],                                    half: &[Rock, Steel],                                         immune: &[Ghost] },
    Matchups { attacking: Fire,     double: &[Grass, Ice, Bug, Steel],              half: &[Fire, Water, Rock, Dragon],                           immune: &[] },
    Matchups { attacking: Water,    double: &[Fire, Ground, Rock],                  half: &[Water, Grass, Dragon],                                immune: &[] },
    Matchups { attacking: Electric, double: &[Water, Flying],                       half: &[Electric, Grass, Dragon],                             immune: &[Ground] },
    Matchups { attacking: Grass,    double: &[Water, Ground, Rock],                 half: &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],     immune: &[] },
    Matchups { attacking: Ice,      double: &[Grass, Ground, Flying, Dragon],       half: &[Fire, Water, Ice, Steel],                             immune: &[] },
    Matchups { attacking: Fighting, double: &[Normal, Ice, Rock, Dark, Steel],      half: &[Poison, Flying, Psychic, Bug, Fairy],                 immune: &[Ghost] },
    Matchups { attacking: Poison,   double: &[Grass, Fairy],                        half: &[Poison, Ground, Rock, Ghost],                         immune: &[Steel] },
    Matchups { attacking: Ground,   double: &[Fire, Electric, Poison, Rock, Steel], half: &[Grass, Bug],                                          immune: &[Flying] },
    Matchups { attacking: Flying,   double: &[Grass, Fighting, Bug],                half: &[Electric, Rock, Steel],                               immune: &[] },
    Matchups { attacking: Psychic,  double: &[Fighting, Poison],                    half: &[Psychic, Steel],                                      immune: &[Dark] },
    Matchups { attacking: Bug,      double: &[Grass, Psychic, Dark],                half: &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy], immune: &[] },
    Matchups { attacking: Rock,     double: &[Fire, Ice, Flying, Bug],              half: &[Fighting, Ground, Steel],                             immune: &[] },
    Matchups { attacking: Ghost,    double: &[Psychic, Ghost],                      half: &[Dark],                                                immune: &[Normal] },
    Matchups { attacking: Dragon,   double: &[Dragon],                              half: &[Steel],                                               immune: &[Fairy] },
    Matchups { attacking: Dark,     double: &[Psychic, Ghost],                      half: &[Fighting, Dark, Fairy],                               immune: &[] },
    Matchups { attacking: Steel,    double: &[Ice, Rock, Fairy],                    half: &[Fire, Water, Electric, Steel],                        immune: &[] },
    Matchups { attacking: Fairy,    double: &[Fighting, Dragon, Dark],              half: &[Fire, Poison, Steel],                                 immune: &[] },
];

/// Standard effectiveness chart, `TYPE_CHART[attacking][defending]`, indexed by [`Type::index`]
pub static TYPE_CHART: [[f64; Type::COUNT]; Type::COUNT] = build_chart();

const fn build_chart() -> [[f64; Type::COUNT]; Type::COUNT] {
    let mut chart = [[1.0; Type::COUNT]; Type::COUNT];
    let mut i = 0;
    while i < MATCHUPS.len() {
        let m = &MATCHUPS[i];
        let row = &mut chart[m.attacking as usize];
        set_all(row, m.double, 2.0);
        set_all(row, m.half, 0.5);
        set_all(row, m.immune, 0.0);
        i += 1;
    }
    chart
}

const fn set_all(row: &mut [f64; Type::COUNT], defending: &[Type], value: f64) {
    let mut i = 0;
    while i < defending.len() {
        row[defending[i] as usize] = value;
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(attacking: Type, defending: Type) -> f64 {
        TYPE_CHART[attacking.index()][defending.index()]
    }

    #[test]
    fn test_chart_super_effective() {
        assert_eq!(chart(Fire, Grass), 2.0);
        assert_eq!(chart(Water, Fire), 2.0);
        assert_eq!(chart(Fighting, Normal), 2.0);
        assert_eq!(chart(Fairy, Dragon), 2.0);
    }

    #[test]
    fn test_chart_resisted_and_neutral() {
        assert_eq!(chart(Bug, Fairy), 0.5);
        assert_eq!(chart(Steel, Steel), 0.5);
        assert_eq!(chart(Normal, Fire), 1.0);
        assert_eq!(chart(Ghost, Ghost), 2.0);
    }

    #[test]
    fn test_chart_immunities() {
        let immune: Vec<(Type, Type)> = Type::ALL
            .iter()
            .flat_map(|&a| Type::ALL.iter().map(move |&d| (a, d)))
            .filter(|&(a, d)| chart(a, d) == 0.0)
            .collect();

        assert_eq!(
            immune,
            vec![
                (Normal, Ghost),
                (Electric, Ground),
                (Fighting, Ghost),
                (Poison, Steel),
                (Ground, Flying),
                (Psychic, Dark),
                (Ghost, Normal),
                (Dragon, Fairy),
            ]
        );
    }

    #[test]
    fn test_matchups_in_chart_order() {
        for (i, m) in MATCHUPS.iter().enumerate() {
            assert_eq!(m.attacking.index(), i);
        }
    }

    #[test]
    fn test_type_from_name() {
        assert_eq!(Type::from_name("Fire"), Some(Fire));
        assert_eq!(Type::from_name("fire"), Some(Fire));
        assert_eq!(Type::from_name(" FIRE "), Some(Fire));
        assert_eq!(Type::from_name("Psychic"), Some(Psychic));
        assert_eq!(Type::from_name("Shadow"), None);
        assert_eq!(Type::from_name(""), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, ty) in Type::all().iter().enumerate() {
            assert_eq!(ty.index(), i);
        }
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[17], Fairy);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(Fire.to_string(), "Fire");
        assert_eq!(Normal.as_str(), "Normal");
    }
}
