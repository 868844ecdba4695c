use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator, Node},
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            utils::is_statement,
        },
        token::TokenKind,
    },
    util::stack::ensure_sufficient_stack,
};

type Rule = fn(&mut Parser) -> ParseResult<Node>;

impl Parser {
    /// Parses one binary precedence level.
    ///
    /// The right operand re-enters the same level, so every level is
    /// right-associative: `1 - 2 - 3` is `1 - (2 - 3)`. The operator and the
    /// start of its right operand must share a line. A left operand that is a
    /// statement ends the level without looking at the next token.
    fn parse_binary_level(&mut self,
                          this: Rule,
                          next: Rule,
                          operators: &[(TokenKind, BinaryOperator)])
                          -> ParseResult<Node> {
        let left = next(self)?;
        if is_statement(&left) {
            return Ok(left);
        }

        let Some(op) = operators.iter()
                                .find(|(kind, _)| self.check(*kind))
                                .map(|(_, op)| *op)
        else {
            return Ok(left);
        };

        let operator = self.advance();
        self.expect_same_line(&operator)?;
        let right = ensure_sufficient_stack(|| this(self))?;

        Ok(Node::Expr(Expr::Binary { left:  Box::new(left.into_expr(&operator.lexeme)?),
                                     op,
                                     right: Box::new(right.into_expr(&operator.lexeme)?),
                                     line:  operator.line, }))
    }

    /// Parses equality expressions.
    ///
    /// The rule is: `equality := comparison (("==" | "!=") equality)?`
    pub(super) fn parse_equality(&mut self) -> ParseResult<Node> {
        self.parse_binary_level(Self::parse_equality,
                                Self::parse_comparison,
                                &[(TokenKind::EqualEqual, BinaryOperator::Equal),
                                  (TokenKind::BangEqual, BinaryOperator::NotEqual)])
    }

    /// Parses ordering comparisons.
    ///
    /// The rule is: `comparison := additive (("<" | "<=" | ">" | ">=")
    /// comparison)?`
    fn parse_comparison(&mut self) -> ParseResult<Node> {
        self.parse_binary_level(Self::parse_comparison,
                                Self::parse_additive,
                                &[(TokenKind::Less, BinaryOperator::Less),
                                  (TokenKind::LessEqual, BinaryOperator::LessEqual),
                                  (TokenKind::Greater, BinaryOperator::Greater),
                                  (TokenKind::GreaterEqual, BinaryOperator::GreaterEqual)])
    }

    /// Parses addition and subtraction, including the doubled `++` / `--`
    /// spellings.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-" | "++" | "--")
    /// additive)?`
    fn parse_additive(&mut self) -> ParseResult<Node> {
        self.parse_binary_level(Self::parse_additive,
                                Self::parse_multiplicative,
                                &[(TokenKind::Plus, BinaryOperator::Add),
                                  (TokenKind::PlusPlus, BinaryOperator::AddAdd),
                                  (TokenKind::Minus, BinaryOperator::Sub),
                                  (TokenKind::MinusMinus, BinaryOperator::SubSub)])
    }

    /// The rule is: `multiplicative := modulo (("*" | "/") multiplicative)?`
    fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        self.parse_binary_level(Self::parse_multiplicative,
                                Self::parse_modulo,
                                &[(TokenKind::Star, BinaryOperator::Mul),
                                  (TokenKind::Slash, BinaryOperator::Div)])
    }

    /// The rule is: `modulo := unary ("%" modulo)?`
    fn parse_modulo(&mut self) -> ParseResult<Node> {
        self.parse_binary_level(Self::parse_modulo,
                                Self::parse_unary,
                                &[(TokenKind::Modulo, BinaryOperator::Mod)])
    }

    /// Parses `&&` / `||`, which bind tighter than every other operator.
    ///
    /// The rule is: `logical := primary (("&&" | "||") logical)?`
    pub(super) fn parse_logical(&mut self) -> ParseResult<Node> {
        let left = self.parse_primary()?;
        if is_statement(&left) {
            return Ok(left);
        }

        let op = match self.peek().kind {
            TokenKind::And => LogicalOperator::And,
            TokenKind::Or => LogicalOperator::Or,
            _ => return Ok(left),
        };

        let operator = self.advance();
        self.expect_same_line(&operator)?;
        let right = ensure_sufficient_stack(|| self.parse_logical())?;

        Ok(Node::Expr(Expr::Logical { left:  Box::new(left.into_expr(&operator.lexeme)?),
                                      op,
                                      right: Box::new(right.into_expr(&operator.lexeme)?),
                                      line:  operator.line, }))
    }
}
