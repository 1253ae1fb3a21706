//! The `/` operator for building expressions.
//!
//! Every form lifts its operands into [`PathExpr`] (a [`Param`] becomes a
//! param reference, text becomes a literal) and then calls
//! [`PathExpr::join`], so the folding rules apply no matter how the join
//! was spelled.

use std::ops::Div;

use super::{PathExpr, Template};
use crate::param::Param;

impl<R: Into<PathExpr>> Div<R> for PathExpr {
    type Output = PathExpr;

    fn div(self, rhs: R) -> PathExpr {
        self.join(rhs)
    }
}

impl<R: Into<PathExpr>> Div<R> for &PathExpr {
    type Output = PathExpr;

    fn div(self, rhs: R) -> PathExpr {
        self.join(rhs)
    }
}

impl<R: Into<PathExpr>> Div<R> for Param {
    type Output = PathExpr;

    fn div(self, rhs: R) -> PathExpr {
        PathExpr::param(self).join(rhs)
    }
}

impl<R: Into<PathExpr>> Div<R> for &Param {
    type Output = PathExpr;

    fn div(self, rhs: R) -> PathExpr {
        PathExpr::param(self.clone()).join(rhs)
    }
}

impl<R: Into<PathExpr>> Div<R> for Template {
    type Output = PathExpr;

    fn div(self, rhs: R) -> PathExpr {
        PathExpr::template(self).join(rhs)
    }
}

// Text on the left: `"/data" / expr`.
macro_rules! impl_text_div {
    ($($rhs:ty),*) => {
        $(
            impl Div<$rhs> for &str {
                type Output = PathExpr;

                fn div(self, rhs: $rhs) -> PathExpr {
                    PathExpr::literal(self).join(rhs)
                }
            }

            impl Div<$rhs> for String {
                type Output = PathExpr;

                fn div(self, rhs: $rhs) -> PathExpr {
                    PathExpr::literal(self).join(rhs)
                }
            }
        )*
    };
}

impl_text_div!(PathExpr, &PathExpr, Param, &Param, Template);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprKind;
    use std::path::Path;

    #[test]
    fn test_param_operands_are_lifted() {
        let root = Param::new("root");
        let dataset = Param::new("dataset");

        let by_operator = &root / &dataset;
        let by_hand = PathExpr::param("root").join(PathExpr::param("dataset"));
        assert_eq!(by_operator, by_hand);

        match by_operator.kind() {
            ExprKind::Join { left, right } => {
                assert!(matches!(left.kind(), ExprKind::ParamRef { .. }));
                assert!(matches!(right.kind(), ExprKind::ParamRef { .. }));
            }
            other => panic!("expected join, got {other:?}"),
        }
    }

    #[test]
    fn test_text_on_the_left() {
        let root = Param::new("root");
        let expr = "/srv" / &root;
        assert_eq!(expr, PathExpr::literal("/srv").join(PathExpr::param("root")));

        let folded = "/srv" / PathExpr::literal("www");
        assert_eq!(folded.as_literal(), Some(Path::new("/srv/www")));

        let owned = String::from("/srv") / root;
        assert!(matches!(owned.kind(), ExprKind::Join { .. }));
    }

    #[test]
    fn test_chained_literals_fold() {
        let expr = PathExpr::literal("/home") / "user" / "data";
        assert_eq!(expr.as_literal(), Some(Path::new("/home/user/data")));
    }

    #[test]
    fn test_template_on_the_left() {
        let template = Template::builder().text("run_").param("id").build();
        let expr = template / "log.txt";
        assert!(matches!(expr.kind(), ExprKind::Join { .. }));
        assert_eq!(expr.required_params().len(), 1);
    }
}
