//! S-expression rendering of pre-AST and AST trees.
//!
//! Output reads back through the reader: a printed pre-AST reproduces the
//! same tree, and a printed AST reproduces a pre-AST that parses to an equal
//! AST (modulo spans).

use crate::{
    Attributes, Delimiter, Expr, ExprKind, Ident, PreKind, PreNode, Properties, StringLookup,
};

/// Render a pre-AST node.
///
/// A top-level `Block` prints one statement per line.
pub fn print_pre<L: StringLookup + ?Sized>(node: &PreNode, lookup: &L) -> String {
    let mut printer = Printer::new(lookup);
    match &node.kind {
        PreKind::Block(stmts) => printer.lines(stmts, Printer::pre),
        _ => printer.pre(node),
    }
    printer.out
}

/// Render an AST node.
pub fn print_expr<L: StringLookup + ?Sized>(expr: &Expr, lookup: &L) -> String {
    let mut printer = Printer::new(lookup);
    printer.expr(expr);
    printer.out
}

struct Printer<'a, L: StringLookup + ?Sized> {
    lookup: &'a L,
    out: String,
}

impl<'a, L: StringLookup + ?Sized> Printer<'a, L> {
    fn new(lookup: &'a L) -> Self {
        Printer {
            lookup,
            out: String::new(),
        }
    }

    fn lines<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            each(self, item);
        }
    }

    fn spaced<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for item in items {
            self.out.push(' ');
            each(self, item);
        }
    }

    fn group<T>(&mut self, delim: Delimiter, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        self.out.push(delim.open_char());
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            each(self, item);
        }
        self.out.push(delim.close_char());
    }

    fn word(&mut self, name: crate::Name) {
        let lookup = self.lookup;
        self.out.push_str(lookup.lookup(name));
    }

    fn keyword(&mut self, name: crate::Name) {
        self.out.push(':');
        self.word(name);
    }

    fn float(&mut self, bits: u64) {
        self.out.push_str(&format!("{:?}", f64::from_bits(bits)));
    }

    fn string(&mut self, name: crate::Name) {
        let lookup = self.lookup;
        let text = lookup.lookup(name);
        self.out.push('"');
        for c in text.chars() {
            match c {
                '\n' => self.out.push_str("\\n"),
                '\t' => self.out.push_str("\\t"),
                '\r' => self.out.push_str("\\r"),
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\0' => self.out.push_str("\\0"),
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn pre(&mut self, node: &PreNode) {
        match &node.kind {
            PreKind::Block(stmts) => {
                self.out.push_str("(seq");
                self.spaced(stmts, Self::pre);
                self.out.push(')');
            }
            PreKind::Tuple { open, elements } => self.group(*open, elements, Self::pre),
            PreKind::Attr { value, attr } => {
                self.pre(value);
                self.out.push('.');
                self.word(attr.name);
            }
            PreKind::Name(name) => self.word(*name),
            PreKind::Keyword(name) => self.keyword(*name),
            PreKind::Int(value) => self.out.push_str(&value.to_string()),
            PreKind::Float(bits) => self.float(*bits),
            PreKind::Str(name) => self.string(*name),
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Block(stmts) => self.form("seq", stmts),
            ExprKind::If { test, conseq, alt } => {
                self.out.push_str("(if ");
                self.expr(test);
                self.out.push(' ');
                self.expr(conseq);
                self.out.push(' ');
                self.expr(alt);
                self.out.push(')');
            }
            ExprKind::Def { pattern, value } => self.binding("define", pattern, value),
            ExprKind::Assign { pattern, value } => self.binding("set!", pattern, value),
            ExprKind::Declare(properties) => {
                self.out.push_str("(declare");
                self.properties(properties);
                self.out.push(')');
            }
            ExprKind::Fun {
                params,
                param_properties,
                body,
            } => {
                self.out.push_str("(fun ");
                match param_properties {
                    Some(properties) => self.typed_params(params, properties),
                    None => self.group(Delimiter::Paren, params, |p, ident| p.word(ident.name)),
                }
                match &body.kind {
                    ExprKind::Block(stmts) => self.spaced(stmts, Self::expr),
                    _ => {
                        self.out.push(' ');
                        self.expr(body);
                    }
                }
                self.out.push(')');
            }
            ExprKind::RecordDef {
                name,
                parents,
                properties,
            } => {
                self.out.push_str("(record ");
                self.word(name.name);
                if let Some(parents) = parents {
                    self.out.push(' ');
                    self.group(Delimiter::Paren, parents, |p, ident| p.word(ident.name));
                }
                self.properties(properties);
                self.out.push(')');
            }
            ExprKind::RecordLiteral(fields) => self.group(Delimiter::Curly, fields, Self::expr),
            ExprKind::VectorLiteral(elements) => {
                self.group(Delimiter::Square, elements, Self::expr);
            }
            ExprKind::Call { func, args } => {
                self.out.push('(');
                self.expr(func);
                self.spaced(args, Self::expr);
                self.out.push(')');
            }
            ExprKind::Attr { value, attr } => {
                self.expr(value);
                self.out.push('.');
                self.word(attr.name);
            }
            ExprKind::Ident(name) => self.word(*name),
            ExprKind::Keyword(name) => self.keyword(*name),
            ExprKind::Int(value) => self.out.push_str(&value.to_string()),
            ExprKind::Float(bits) => self.float(*bits),
            ExprKind::Str(name) => self.string(*name),
        }
    }

    fn form(&mut self, head: &str, items: &[Expr]) {
        self.out.push('(');
        self.out.push_str(head);
        self.spaced(items, Self::expr);
        self.out.push(')');
    }

    fn binding(&mut self, head: &str, pattern: &Expr, value: &Expr) {
        self.out.push('(');
        self.out.push_str(head);
        self.out.push(' ');
        self.expr(pattern);
        self.out.push(' ');
        self.expr(value);
        self.out.push(')');
    }

    /// Each field as ` [name Type :key value ...]`.
    fn properties(&mut self, properties: &Properties) {
        for (field, attrs) in properties.iter() {
            self.out.push(' ');
            self.field(field, attrs);
        }
    }

    fn field(&mut self, field: &Ident, attrs: &Attributes) {
        self.out.push('[');
        self.word(field.name);
        self.attributes(attrs);
        self.out.push(']');
    }

    /// A typed parameter list, in source order.
    ///
    /// Table entries and `params` share identifiers (name and span), so each
    /// parameter is matched to its own field spec. Entries no parameter
    /// claims (the `->` spec) print where they fall in the table; a
    /// parameter without an entry prints as `(name)`.
    fn typed_params(&mut self, params: &[Ident], properties: &Properties) {
        let fields: Vec<(&Ident, &Attributes)> = properties.iter().collect();
        let mut items: Vec<(Ident, Option<&Attributes>)> = Vec::with_capacity(fields.len());
        let mut next = 0;
        for param in params {
            match fields[next..].iter().position(|(field, _)| *field == param) {
                Some(offset) => {
                    let end = next + offset;
                    items.extend(fields[next..=end].iter().map(|(f, a)| (**f, Some(*a))));
                    next = end + 1;
                }
                None => items.push((*param, None)),
            }
        }
        items.extend(fields[next..].iter().map(|(f, a)| (**f, Some(*a))));

        self.group(Delimiter::Paren, &items, |p, (ident, attrs)| match attrs {
            Some(attrs) => p.field(ident, attrs),
            None => {
                p.out.push('(');
                p.word(ident.name);
                p.out.push(')');
            }
        });
    }

    /// The `type` attribute prints positionally, the rest as keyword pairs.
    fn attributes(&mut self, attrs: &Attributes) {
        let is_type = |lookup: &L, key| lookup.lookup(key) == "type";
        if let Some((_, ty)) = attrs.iter().find(|(key, _)| is_type(self.lookup, *key)) {
            self.out.push(' ');
            self.expr(ty);
        }
        for (key, value) in attrs.iter() {
            if is_type(self.lookup, key) {
                continue;
            }
            self.out.push(' ');
            self.keyword(key);
            self.out.push(' ');
            self.expr(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileId, Span, StringInterner};

    fn sp() -> Span {
        Span::new(FileId::DUMMY, 0, 0, 1, 1)
    }

    fn name(interner: &StringInterner, s: &str) -> PreNode {
        PreNode::new(PreKind::Name(interner.intern(s)), sp())
    }

    fn ident(interner: &StringInterner, s: &str) -> Expr {
        Expr::new(ExprKind::Ident(interner.intern(s)), sp())
    }

    #[test]
    fn test_print_pre_tuples_and_atoms() {
        let interner = StringInterner::new();
        let node = PreNode::tuple(
            Delimiter::Paren,
            vec![
                name(&interner, "f"),
                PreNode::tuple(
                    Delimiter::Square,
                    vec![PreNode::new(PreKind::Int(-3), sp())],
                    sp(),
                ),
                PreNode::new(PreKind::Keyword(interner.intern("k")), sp()),
                PreNode::new(PreKind::Float(2.5f64.to_bits()), sp()),
                PreNode::new(PreKind::Str(interner.intern("a\"b\n")), sp()),
                PreNode::tuple(Delimiter::Curly, Vec::new(), sp()),
            ],
            sp(),
        );
        assert_eq!(
            print_pre(&node, &interner),
            r#"(f [-3] :k 2.5 "a\"b\n" {})"#
        );
    }

    #[test]
    fn test_print_pre_block_one_line_per_statement() {
        let interner = StringInterner::new();
        let attr = PreNode::new(
            PreKind::Attr {
                value: Box::new(name(&interner, "a")),
                attr: Ident::new(interner.intern("b"), sp()),
            },
            sp(),
        );
        let block = PreNode::new(PreKind::Block(vec![attr, name(&interner, "c")]), sp());
        assert_eq!(print_pre(&block, &interner), "a.b\nc");
    }

    #[test]
    fn test_print_expr_fun_with_properties() {
        let interner = StringInterner::new();
        let ty = interner.intern("type");
        let default = interner.intern("default");
        let x = Ident::new(interner.intern("x"), sp());

        let mut props = Properties::new();
        props.insert(x, ty, ident(&interner, "Int"));
        props.insert(x, default, Expr::new(ExprKind::Int(0), sp()));

        let fun = Expr::new(
            ExprKind::Fun {
                params: vec![x],
                param_properties: Some(props),
                body: Box::new(Expr::new(
                    ExprKind::Block(vec![ident(&interner, "x")]),
                    sp(),
                )),
            },
            sp(),
        );
        assert_eq!(
            print_expr(&fun, &interner),
            "(fun ([x Int :default 0]) x)"
        );
    }

    #[test]
    fn test_print_expr_fun_keeps_params_without_entries() {
        let interner = StringInterner::new();
        let ty = interner.intern("type");
        let at = |start| Span::new(FileId::DUMMY, start, start + 1, 1, start + 1);
        let x = Ident::new(interner.intern("x"), at(6));
        let y = Ident::new(interner.intern("y"), at(14));
        let arrow = Ident::new(interner.intern("->"), at(22));

        let mut props = Properties::new();
        props.insert(x, ty, ident(&interner, "Int"));
        props.insert(arrow, ty, ident(&interner, "Int"));

        let fun = Expr::new(
            ExprKind::Fun {
                params: vec![x, y],
                param_properties: Some(props),
                body: Box::new(Expr::new(
                    ExprKind::Block(vec![ident(&interner, "x")]),
                    sp(),
                )),
            },
            sp(),
        );
        assert_eq!(
            print_expr(&fun, &interner),
            "(fun ([x Int] (y) [-> Int]) x)"
        );
    }

    #[test]
    fn test_print_expr_record_and_call() {
        let interner = StringInterner::new();
        let ty = interner.intern("type");
        let mut props = Properties::new();
        props.insert(
            Ident::new(interner.intern("name"), sp()),
            ty,
            ident(&interner, "String"),
        );
        let record = Expr::new(
            ExprKind::RecordDef {
                name: Ident::new(interner.intern("Dog"), sp()),
                parents: Some(vec![Ident::new(interner.intern("Animal"), sp())]),
                properties: props,
            },
            sp(),
        );
        assert_eq!(
            print_expr(&record, &interner),
            "(record Dog (Animal) [name String])"
        );

        let call = Expr::new(
            ExprKind::Call {
                func: Box::new(ident(&interner, "f")),
                args: vec![Expr::new(
                    ExprKind::VectorLiteral(vec![Expr::new(ExprKind::Int(1), sp())]),
                    sp(),
                )],
            },
            sp(),
        );
        assert_eq!(print_expr(&call, &interner), "(f [1])");
    }
}
