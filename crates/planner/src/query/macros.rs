#[macro_export]
macro_rules! all_of {
    ($($node:expr),+ $(,)?) => {
        $crate::query::ast::node::QueryNode::And(vec![$($node),+])
    };
}
