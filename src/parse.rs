// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Small text helpers shared by the point parser, the command
//! language, and the command line.

use std::str::FromStr;

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (
            T::from_str(s[..index].trim()),
            T::from_str(s[index + 1..].trim()),
        ) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_separator() {
        assert_eq!(parse_pair::<u32>("800x600", 'x'), Some((800, 600)));
        assert_eq!(parse_pair::<f64>("1.5, -2", ','), Some((1.5, -2.0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_pair::<u32>("800", 'x'), None);
        assert_eq!(parse_pair::<u32>("800x", 'x'), None);
        assert_eq!(parse_pair::<u32>("ax600", 'x'), None);
    }
}
