//! Expression parsing.
//!
//! The precedence ladder is the grammar's chain of productions, lowest
//! precedence first: equality, comparison, term, factor, unary, primary.
//! Each binary level folds left-associatively: the parsed `(left op
//! right)` becomes the new left operand before the level looks for
//! another operator.

use loxi_lex::TokenKind;

use crate::ast::{BinaryExpr, Expr, Literal, UnaryExpr};
use crate::error::{ParseContext, ParseError};
use crate::Parser;

impl Parser {
    /// Parses a complete expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        if self.is_at_end() {
            return Err(ParseError::UnexpectedEof {
                context: ParseContext::Expression,
                span: self.peek().span,
            });
        }
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(
            &[TokenKind::EqualEqual, TokenKind::BangEqual],
            Parser::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(
            &[
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
            ],
            Parser::parse_term,
        )
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&[TokenKind::Minus, TokenKind::Plus], Parser::parse_factor)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&[TokenKind::Slash, TokenKind::Star], Parser::parse_unary)
    }

    /// One level of the binary ladder: parse an operand, then fold
    /// `(left op right)` into the new left for as long as one of
    /// `operators` follows.
    fn parse_left_assoc(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Parser) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;
        while let Some(operator) = self.match_operator(operators) {
            let right = operand(self)?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(operator) = self.match_operator(&[TokenKind::Bang, TokenKind::Minus]) {
            if self.is_at_end() {
                return Err(ParseError::UnexpectedEof {
                    context: ParseContext::UnaryOrPrimary,
                    span: self.peek().span,
                });
            }
            let expr = self.parse_unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                operator,
                expr: Box::new(expr),
            }));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::False => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(false)))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(true)))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::Literal(Literal::Nil))
            }
            TokenKind::Number(lexeme) => {
                self.advance();
                // The scanner only produces `digits ('.' digits?)?`, all of
                // which f64's parser accepts, trailing dot included.
                let value = lexeme.parse::<f64>().unwrap_or_default();
                Ok(Expr::Literal(Literal::Number(value)))
            }
            TokenKind::String(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::Str(text)))
            }
            TokenKind::LeftParen => {
                let open = self.advance();
                let inner = self.parse_expression()?;
                if matches!(self.peek().kind, TokenKind::RightParen) {
                    self.advance();
                    Ok(Expr::Grouping(Box::new(inner)))
                } else if self.is_at_end() {
                    Err(ParseError::UnexpectedEof {
                        context: ParseContext::Group { open },
                        span: self.peek().span,
                    })
                } else {
                    Err(ParseError::UnexpectedToken {
                        token: self.peek().clone(),
                        context: ParseContext::Group { open },
                    })
                }
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEof {
                context: ParseContext::Primary,
                span: self.peek().span,
            }),
            _ => Err(ParseError::UnexpectedToken {
                token: self.peek().clone(),
                context: ParseContext::Primary,
            }),
        }
    }
}
