use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("not a #RRGGBB colour: {0:?}")]
pub struct ColourParseError(String);

/// Display colour of a disk.  Purely cosmetic, nothing in the solver looks at it.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiskColour {
  pub red: u8,
  pub green: u8,
  pub blue: u8,
}

impl DiskColour {
  pub const fn new(red: u8, green: u8, blue: u8) -> Self {
    Self { red, green, blue }
  }

  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    Self::new(rng.gen(), rng.gen(), rng.gen())
  }
}

impl Display for DiskColour {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
  }
}

impl FromStr for DiskColour {
  type Err = ColourParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let err = || ColourParseError(s.to_owned());
    let hex = s.strip_prefix('#').ok_or_else(err)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(err());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
    Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
  }
}

impl TryFrom<String> for DiskColour {
  type Error = ColourParseError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<DiskColour> for String {
  fn from(colour: DiskColour) -> Self {
    colour.to_string()
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;

  #[test]
  fn test_display_is_upper_hex() {
    assert_eq!(DiskColour::new(0x0a, 0xff, 0x00).to_string(), "#0AFF00");
  }

  #[test]
  fn test_parse() {
    assert_eq!("#0AFF00".parse::<DiskColour>(), Ok(DiskColour::new(0x0a, 0xff, 0x00)));
    assert_eq!("#0aff00".parse::<DiskColour>(), Ok(DiskColour::new(0x0a, 0xff, 0x00)));
    assert!("0AFF00".parse::<DiskColour>().is_err());
    assert!("#0AFF0".parse::<DiskColour>().is_err());
    assert!("#0AFFZZ".parse::<DiskColour>().is_err());
  }

  #[test]
  fn test_seeded_colours_repeat() {
    let a = DiskColour::random(&mut StdRng::seed_from_u64(7));
    let b = DiskColour::random(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
  }

  #[test]
  fn test_serde_as_string() {
    let colour = DiskColour::new(1, 2, 3);
    let json = serde_json::to_string(&colour).unwrap();
    assert_eq!(json, r##""#010203""##);
    assert_eq!(serde_json::from_str::<DiskColour>(&json).unwrap(), colour);
  }
}
