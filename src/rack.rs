// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// case-insensitive, no more than rack_size tiles.
pub fn parse_rack(
    alphabet: &alphabet::Alphabet,
    s: &str,
    rack_size: usize,
) -> error::Returns<Vec<u8>> {
    let rack = s.trim().bytes().map(|b| b.to_ascii_uppercase()).collect::<Vec<_>>();
    check_rack(alphabet, &rack, rack_size)?;
    Ok(rack)
}

pub fn check_rack(
    alphabet: &alphabet::Alphabet,
    rack: &[u8],
    rack_size: usize,
) -> error::Returns<()> {
    if rack.len() > rack_size {
        return_error!(format!(
            "rack has {} tiles, at most {} allowed",
            rack.len(),
            rack_size
        ));
    }
    if let Some(&bad) = rack.iter().find(|&&tile| !alphabet.is_letter(tile)) {
        return_error!(format!("rack has invalid tile {:?}", bad as char));
    }
    Ok(())
}

// removes one copy of each played tile.
pub fn use_tiles<II: IntoIterator<Item = u8>>(
    rack: &mut Vec<u8>,
    tiles_iter: II,
) -> error::Returns<()> {
    for tile in tiles_iter {
        let pos = rack
            .iter()
            .position(|&t| t == tile)
            .ok_or_else(|| format!("tile {:?} is not on the rack", tile as char))?;
        rack.remove(pos);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_racks() {
        let alphabet = &alphabet::ENGLISH_ALPHABET;
        assert_eq!(parse_rack(alphabet, " cAt ", 7).unwrap(), b"CAT");
        assert_eq!(parse_rack(alphabet, "", 7).unwrap(), b"");
        assert!(parse_rack(alphabet, "ABCDEFGH", 7).is_err());
        assert!(parse_rack(alphabet, "AB?", 7).is_err());
    }

    #[test]
    fn uses_exactly_the_played_tiles() {
        let mut rack = b"AABCDEE".to_vec();
        use_tiles(&mut rack, b"EAE".iter().copied()).unwrap();
        assert_eq!(rack, b"ABCD");
        assert!(use_tiles(&mut rack, b"Z".iter().copied()).is_err());
    }
}
