//! Error recovery for the parser.
//!
//! After a statement fails to parse, the cursor is moved to the next
//! plausible statement boundary so later statements still get parsed and
//! reported against.

use crate::cursor::Cursor;
use tarn_ir::TokenKind;

/// Skip to the next statement boundary.
///
/// Consumes tokens up to and including the next `;`, or stops just before
/// a token that can start or close a statement (`let`, `return`, `}`) or
/// end of input.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    while !cursor.is_at_end() {
        match cursor.current_kind() {
            TokenKind::Semicolon => {
                cursor.advance();
                return;
            }
            TokenKind::Let | TokenKind::Return | TokenKind::RBrace => return,
            _ => {
                cursor.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_ir::{StringInterner, Token, TokenList};

    fn tokens(kinds: &[TokenKind]) -> TokenList {
        TokenList::new(kinds.iter().map(|&k| Token::dummy(k)).collect())
    }

    #[test]
    fn skips_past_semicolon() {
        let interner = StringInterner::new();
        let list = tokens(&[
            TokenKind::Int(1),
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Int(2),
        ]);
        let mut cursor = Cursor::new(&list, &interner);

        synchronize(&mut cursor);
        assert_eq!(cursor.current_kind(), TokenKind::Int(2));
    }

    #[test]
    fn stops_before_let() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Int(1), TokenKind::Let]);
        let mut cursor = Cursor::new(&list, &interner);

        synchronize(&mut cursor);
        assert_eq!(cursor.current_kind(), TokenKind::Let);
    }

    #[test]
    fn stops_at_eof() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Int(1), TokenKind::Plus]);
        let mut cursor = Cursor::new(&list, &interner);

        synchronize(&mut cursor);
        assert!(cursor.is_at_end());
    }
}
