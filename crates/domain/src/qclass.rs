use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QClass {
    IN,
    CH,
    HS,
}

impl QClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            QClass::IN => "IN",
            QClass::CH => "CH",
            QClass::HS => "HS",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            QClass::IN => 1,
            QClass::CH => 3,
            QClass::HS => 4,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(QClass::IN),
            3 => Some(QClass::CH),
            4 => Some(QClass::HS),
            _ => None,
        }
    }
}

/// Render a numeric class: mnemonic when known, `CLASS<n>` otherwise.
pub fn class_name(code: u16) -> String {
    match QClass::from_u16(code) {
        Some(class) => class.as_str().to_string(),
        None => format!("CLASS{}", code),
    }
}

impl fmt::Display for QClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(QClass::IN),
            "CH" => Ok(QClass::CH),
            "HS" => Ok(QClass::HS),
            _ => Err(format!("Unknown query class: {}", s)),
        }
    }
}
