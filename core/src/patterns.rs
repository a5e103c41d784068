// Morse code symbol table - finished dot/dash sequence to character mapping
use crate::types::Symbol;

pub type MorsePattern = &'static [Symbol];

/// Substituted for any finished sequence the table does not contain.
pub const UNRECOGNIZED: char = '?';

const DIT: Symbol = Symbol::Dot;
const DAH: Symbol = Symbol::Dash;

// Letters and digits, the alphabet the optical channel carries.
static MORSE_TABLE: &[(MorsePattern, char)] = &[
    (&[DIT, DAH], 'A'),                // .-
    (&[DAH, DIT, DIT, DIT], 'B'),      // -...
    (&[DAH, DIT, DAH, DIT], 'C'),      // -.-.
    (&[DAH, DIT, DIT], 'D'),           // -..
    (&[DIT], 'E'),                     // .
    (&[DIT, DIT, DAH, DIT], 'F'),      // ..-.
    (&[DAH, DAH, DIT], 'G'),           // --.
    (&[DIT, DIT, DIT, DIT], 'H'),      // ....
    (&[DIT, DIT], 'I'),                // ..
    (&[DIT, DAH, DAH, DAH], 'J'),      // .---
    (&[DAH, DIT, DAH], 'K'),           // -.-
    (&[DIT, DAH, DIT, DIT], 'L'),      // .-..
    (&[DAH, DAH], 'M'),                // --
    (&[DAH, DIT], 'N'),                // -.
    (&[DAH, DAH, DAH], 'O'),           // ---
    (&[DIT, DAH, DAH, DIT], 'P'),      // .--.
    (&[DAH, DAH, DIT, DAH], 'Q'),      // --.-
    (&[DIT, DAH, DIT], 'R'),           // .-.
    (&[DIT, DIT, DIT], 'S'),           // ...
    (&[DAH], 'T'),                     // -
    (&[DIT, DIT, DAH], 'U'),           // ..-
    (&[DIT, DIT, DIT, DAH], 'V'),      // ...-
    (&[DIT, DAH, DAH], 'W'),           // .--
    (&[DAH, DIT, DIT, DAH], 'X'),      // -..-
    (&[DAH, DIT, DAH, DAH], 'Y'),      // -.--
    (&[DAH, DAH, DIT, DIT], 'Z'),      // --..
    (&[DIT, DAH, DAH, DAH, DAH], '1'), // .----
    (&[DIT, DIT, DAH, DAH, DAH], '2'), // ..---
    (&[DIT, DIT, DIT, DAH, DAH], '3'), // ...--
    (&[DIT, DIT, DIT, DIT, DAH], '4'), // ....-
    (&[DIT, DIT, DIT, DIT, DIT], '5'), // .....
    (&[DAH, DIT, DIT, DIT, DIT], '6'), // -....
    (&[DAH, DAH, DIT, DIT, DIT], '7'), // --...
    (&[DAH, DAH, DAH, DIT, DIT], '8'), // ---..
    (&[DAH, DAH, DAH, DAH, DIT], '9'), // ----.
    (&[DAH, DAH, DAH, DAH, DAH], '0'), // -----
];

/// Exact-match lookup of a finished sequence.
pub fn lookup(sequence: &[Symbol]) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(pattern, _)| *pattern == sequence)
        .map(|&(_, ch)| ch)
}

/// Resolve a finished sequence to a character, substituting [`UNRECOGNIZED`]
/// when the table has no entry. Total by construction: every sequence maps
/// to something.
pub fn resolve(sequence: &[Symbol]) -> char {
    lookup(sequence).unwrap_or(UNRECOGNIZED)
}
