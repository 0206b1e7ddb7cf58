//! Refrigerant identifiers.

/// Refrigerants the workspace knows how to look up.
///
/// Restricted to pure (or pseudo-pure) fluids the CoolProp backend exposes;
/// zeotropic blends (R404A, R407C, R410A, ...) are out until the backend
/// grows mixture support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refrigerant {
    /// HCFC-22
    R22,
    /// HFC-32
    R32,
    /// HFC-125
    R125,
    /// HFC-134a
    R134a,
    /// HFC-152a
    R152a,
    /// HFC-245fa
    R245fa,
    /// Propane
    R290,
    /// n-Butane
    R600,
    /// Isobutane
    R600a,
    /// Ammonia
    R717,
    /// Water
    R718,
    /// Carbon dioxide
    R744,
    /// HFO-1234yf
    R1234yf,
    /// Propylene
    R1270,
}

/// ASHRAE refrigerant family, used for listings and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefrigerantFamily {
    Hcfc,
    Hfc,
    Hfo,
    Hydrocarbon,
    Inorganic,
    CarbonDioxide,
}

impl Refrigerant {
    pub const ALL: [Refrigerant; 14] = [
        Refrigerant::R22,
        Refrigerant::R32,
        Refrigerant::R125,
        Refrigerant::R134a,
        Refrigerant::R152a,
        Refrigerant::R245fa,
        Refrigerant::R290,
        Refrigerant::R600,
        Refrigerant::R600a,
        Refrigerant::R717,
        Refrigerant::R718,
        Refrigerant::R744,
        Refrigerant::R1234yf,
        Refrigerant::R1270,
    ];

    /// ASHRAE designation, the identifier catalogs use.
    pub fn designation(&self) -> &'static str {
        match self {
            Refrigerant::R22 => "R22",
            Refrigerant::R32 => "R32",
            Refrigerant::R125 => "R125",
            Refrigerant::R134a => "R134a",
            Refrigerant::R152a => "R152a",
            Refrigerant::R245fa => "R245fa",
            Refrigerant::R290 => "R290",
            Refrigerant::R600 => "R600",
            Refrigerant::R600a => "R600a",
            Refrigerant::R717 => "R717",
            Refrigerant::R718 => "R718",
            Refrigerant::R744 => "R744",
            Refrigerant::R1234yf => "R1234yf",
            Refrigerant::R1270 => "R1270",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Refrigerant::R22 => "HCFC-22",
            Refrigerant::R32 => "HFC-32",
            Refrigerant::R125 => "HFC-125",
            Refrigerant::R134a => "HFC-134a",
            Refrigerant::R152a => "HFC-152a",
            Refrigerant::R245fa => "HFC-245fa",
            Refrigerant::R290 => "Propane",
            Refrigerant::R600 => "Butane",
            Refrigerant::R600a => "Isobutane",
            Refrigerant::R717 => "Ammonia",
            Refrigerant::R718 => "Water",
            Refrigerant::R744 => "Carbon Dioxide",
            Refrigerant::R1234yf => "HFO-1234yf",
            Refrigerant::R1270 => "Propylene",
        }
    }

    pub fn family(&self) -> RefrigerantFamily {
        match self {
            Refrigerant::R22 => RefrigerantFamily::Hcfc,
            Refrigerant::R32
            | Refrigerant::R125
            | Refrigerant::R134a
            | Refrigerant::R152a
            | Refrigerant::R245fa => RefrigerantFamily::Hfc,
            Refrigerant::R1234yf => RefrigerantFamily::Hfo,
            Refrigerant::R290 | Refrigerant::R600 | Refrigerant::R600a | Refrigerant::R1270 => {
                RefrigerantFamily::Hydrocarbon
            }
            Refrigerant::R717 | Refrigerant::R718 => RefrigerantFamily::Inorganic,
            Refrigerant::R744 => RefrigerantFamily::CarbonDioxide,
        }
    }

    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            Refrigerant::R22 => Pure::R22,
            Refrigerant::R32 => Pure::R32,
            Refrigerant::R125 => Pure::R125,
            Refrigerant::R134a => Pure::R134a,
            Refrigerant::R152a => Pure::R152a,
            Refrigerant::R245fa => Pure::R245fa,
            Refrigerant::R290 => Pure::nPropane,
            Refrigerant::R600 => Pure::nButane,
            Refrigerant::R600a => Pure::Isobutane,
            Refrigerant::R717 => Pure::Ammonia,
            Refrigerant::R718 => Pure::Water,
            Refrigerant::R744 => Pure::CarbonDioxide,
            Refrigerant::R1234yf => Pure::R1234yf,
            Refrigerant::R1270 => Pure::Propylene,
        }
    }
}

impl std::fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.designation())
    }
}

impl std::str::FromStr for Refrigerant {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        for r in Refrigerant::ALL {
            if r.designation().eq_ignore_ascii_case(query)
                || r.display_name().eq_ignore_ascii_case(query)
            {
                return Ok(r);
            }
        }
        Err("unknown refrigerant designation")
    }
}
