// this module is transparently re-exported by its parent `lib`
use std::collections::BTreeMap;

use algiso_tree::{IdKind, Tree};

use crate::{AlgebraError, Operator};

/// Build the tree of the operator identified by `key`, from its arguments.
///
/// Arguments are positional, and mapped to the fields of the operator record
/// (e.g. `filter` takes an expression then an input).
/// See [`Operator`] for the known keys;
/// any other key is considered the symbol of an [`Operator::Expression`],
/// applied to `args`.
///
/// # Special cases
/// * `leftjoin` takes an optional third argument (its expression);
///   `true` as third argument also means "no expression".
/// * `slice` takes `start, length, input`; a length of `-1` means "no length".
/// * `table` builds a [`values`](Operator::Values) record:
///   its first argument is an expression whose `args` are the variables,
///   and each following argument is an expression whose `args` are `[variable, value]` pairs.
/// * `aggregate` takes `symbol, expression`, optionally followed by a variable;
///   `group_concat` may also take a separator, before the variable.
///
/// # Errors
/// Operators with a fixed number of fields fail with [`AlgebraError::Arity`]
/// if given another number of arguments.
pub fn algebra_element(key: &str, args: Vec<Tree>) -> Result<Tree, AlgebraError> {
    use Operator::*;
    let Ok(op) = key.parse::<Operator>() else {
        return Ok(expression(key, args));
    };
    Ok(match op {
        Bgp => node(op, [("patterns", Tree::Sequence(args))]),
        Distinct | Reduced => {
            let [input] = exact(op, args)?;
            node(op, [("input", input)])
        }
        Extend => {
            let [input, variable, expression] = exact(op, args)?;
            node(
                op,
                [
                    ("input", input),
                    ("variable", variable),
                    ("expression", expression),
                ],
            )
        }
        Filter => {
            let [expression, input] = exact(op, args)?;
            node(op, [("expression", expression), ("input", input)])
        }
        Graph => {
            let [graph, input] = exact(op, args)?;
            node(op, [("graph", graph), ("input", input)])
        }
        Group => {
            let [variables, aggregates, input] = exact(op, args)?;
            node(
                op,
                [
                    ("variables", variables),
                    ("aggregates", aggregates),
                    ("input", input),
                ],
            )
        }
        Join | Minus | Union | Alt | Seq => {
            let [left, right] = exact(op, args)?;
            node(op, [("left", left), ("right", right)])
        }
        LeftJoin => left_join(args)?,
        OrderBy => {
            let [input, expressions] = exact(op, args)?;
            node(op, [("input", input), ("expressions", expressions)])
        }
        Project => {
            let [input, variables] = exact(op, args)?;
            node(op, [("input", input), ("variables", variables)])
        }
        Slice => {
            let [start, length, input] = exact(op, args)?;
            if length == Tree::from(-1) {
                node(op, [("input", input), ("start", start)])
            } else {
                node(
                    op,
                    [("input", input), ("start", start), ("length", length)],
                )
            }
        }
        Triple | Path => {
            let [subject, predicate, object] = exact(op, args)?;
            node(
                op,
                [
                    ("subject", subject),
                    ("predicate", predicate),
                    ("object", object),
                ],
            )
        }
        Inv | OneOrMorePath | ZeroOrOnePath | ZeroOrMorePath => {
            let [path] = exact(op, args)?;
            node(op, [("path", path)])
        }
        Link => {
            let [iri] = exact(op, args)?;
            node(op, [("iri", iri)])
        }
        Nps => node(op, [("iris", Tree::Sequence(args))]),
        Table => values(args)?,
        Aggregate => aggregate(args)?,
        Expression | Values => expression(key, args),
    })
}

/// Build a [triple pattern](Operator::Triple).
pub fn triple<S, P, O>(subject: S, predicate: P, object: O) -> Tree
where
    S: Into<Tree>,
    P: Into<Tree>,
    O: Into<Tree>,
{
    node(
        Operator::Triple,
        [
            ("subject", subject.into()),
            ("predicate", predicate.into()),
            ("object", object.into()),
        ],
    )
}

fn node<const N: usize>(op: Operator, fields: [(&str, Tree); N]) -> Tree {
    let mut record: BTreeMap<String, Tree> = fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    record.insert("type".to_string(), Tree::from(op.key()));
    Tree::Record(record)
}

fn expression(symbol: &str, args: Vec<Tree>) -> Tree {
    node(
        Operator::Expression,
        [("symbol", Tree::from(symbol)), ("args", Tree::Sequence(args))],
    )
}

fn exact<const N: usize>(operator: Operator, args: Vec<Tree>) -> Result<[Tree; N], AlgebraError> {
    <[Tree; N]>::try_from(args).map_err(|args| AlgebraError::Arity {
        operator,
        expected: N.to_string(),
        found: args.len(),
    })
}

fn left_join(args: Vec<Tree>) -> Result<Tree, AlgebraError> {
    let op = Operator::LeftJoin;
    let found = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next(), args.next()) {
        (Some(left), Some(right), None, None) => Ok(node(op, [("left", left), ("right", right)])),
        (Some(left), Some(right), Some(flag), None) if flag == Tree::from(true) => {
            Ok(node(op, [("left", left), ("right", right)]))
        }
        (Some(left), Some(right), Some(expression), None) => Ok(node(
            op,
            [
                ("left", left),
                ("right", right),
                ("expression", expression),
            ],
        )),
        _ => Err(AlgebraError::Arity {
            operator: op,
            expected: "2 or 3".to_string(),
            found,
        }),
    }
}

fn values(args: Vec<Tree>) -> Result<Tree, AlgebraError> {
    let op = Operator::Table;
    let Some((header, rows)) = args.split_first() else {
        return Err(AlgebraError::Arity {
            operator: op,
            expected: "at least 1".to_string(),
            found: 0,
        });
    };
    let variables = inner_args(header)?.to_vec();
    let bindings = rows
        .iter()
        .map(|row| {
            let mut binding = BTreeMap::new();
            for entry in inner_args(row)? {
                match entry.as_sequence() {
                    Some([variable, value]) => {
                        let Some(variable) = variable.as_str() else {
                            return Err(malformed(format!("{variable} is not a variable name")));
                        };
                        binding.insert(variable.to_string(), value.clone());
                    }
                    _ => return Err(malformed(format!("{entry} is not a [variable, value] pair"))),
                }
            }
            Ok(Tree::Record(binding))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(node(
        Operator::Values,
        [
            ("variables", Tree::Sequence(variables)),
            ("bindings", Tree::Sequence(bindings)),
        ],
    ))
}

/// The `args` of an expression, as used by `table`.
fn inner_args(expr: &Tree) -> Result<&[Tree], AlgebraError> {
    expr.get("args")
        .and_then(Tree::as_sequence)
        .ok_or_else(|| malformed(format!("{expr} has no 'args' sequence")))
}

fn malformed(reason: String) -> AlgebraError {
    AlgebraError::Malformed {
        operator: Operator::Table,
        reason,
    }
}

fn aggregate(args: Vec<Tree>) -> Result<Tree, AlgebraError> {
    let op = Operator::Aggregate;
    let group_concat = args.first().and_then(Tree::as_str) == Some("group_concat");
    let found = args.len();
    let mut args = args.into_iter();
    let (Some(symbol), Some(expression)) = (args.next(), args.next()) else {
        return Err(arity_error(group_concat, found));
    };
    let mut record = BTreeMap::new();
    record.insert("type".to_string(), Tree::from(op.key()));
    record.insert("symbol".to_string(), symbol);
    record.insert("expression".to_string(), expression);
    match (args.next(), args.next(), args.next()) {
        (None, None, None) => {}
        (Some(third), None, None) => {
            let is_variable = third
                .as_str()
                .and_then(IdKind::of)
                .is_some_and(|kind| kind == IdKind::Variable);
            if group_concat && !is_variable {
                record.insert("separator".to_string(), third);
            } else {
                record.insert("variable".to_string(), third);
            }
        }
        (Some(separator), Some(variable), None) if group_concat => {
            record.insert("separator".to_string(), separator);
            record.insert("variable".to_string(), variable);
        }
        _ => return Err(arity_error(group_concat, found)),
    }
    Ok(Tree::Record(record))
}

fn arity_error(group_concat: bool, found: usize) -> AlgebraError {
    AlgebraError::Arity {
        operator: Operator::Aggregate,
        expected: if group_concat { "2 to 4" } else { "2 or 3" }.to_string(),
        found,
    }
}
