//! Row delimiter helpers.
//!
//! A DSV document stores the whole table as one text buffer, each row terminated by a row
//! delimiter. Documents produced on Windows typically use CRLF (`"\r\n"`); classic Mac
//! exports use a bare CR. The delimiter can be fixed explicitly in
//! [`DsvModelOptions`](crate::DsvModelOptions) or detected from the document content.

/// The row delimiter sequence separating records in the raw buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDelimiter {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
    /// Classic Mac CR (`'\r'`).
    Cr,
}

impl RowDelimiter {
    /// Detect the dominant row delimiter from a source text.
    ///
    /// Policy: if the input contains any CRLF (`"\r\n"`), returns [`RowDelimiter::Crlf`];
    /// a bare `'\r'` yields [`RowDelimiter::Cr`]; everything else defaults to
    /// [`RowDelimiter::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else if text.contains('\r') {
            Self::Cr
        } else {
            Self::Lf
        }
    }

    /// The delimiter as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Length of the delimiter in characters.
    pub fn char_len(self) -> usize {
        self.as_str().len()
    }
}
