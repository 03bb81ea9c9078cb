//! Tuple-pattern lambdas.
//!
//! `((a, b)) => body` becomes
//! `(__tupleN) => { val a = item(__tupleN, 1); val b = item(__tupleN, 2); body }`
//! where `N` is the identifier of the new lambda.

use quint_ir::builtin_opcodes::access;
use quint_ir::{Expr, LambdaParameter, OpDef, Qualifier};

use crate::lower::{LoweringState, Site};

impl LoweringState {
    /// Build the single-parameter lambda binding each element of the tuple
    /// pattern `params`. A bound element reuses its parameter's identifier
    /// for its `val`; `_` elements bind nothing.
    pub(crate) fn unpack_tuple_lambda(
        &mut self,
        site: &Site<'_>,
        params: Vec<LambdaParameter>,
        body: Expr,
    ) -> Expr {
        let lambda_id = self.fresh_id(site);
        let tuple_param =
            LambdaParameter::new(self.fresh_id(site), format!("__tuple{lambda_id}"));

        let positioned: Vec<(i128, LambdaParameter)> = (1..).zip(params).collect();
        let mut body = body;
        for (position, param) in positioned.into_iter().rev() {
            if param.is_hole() {
                continue;
            }
            let tuple = Expr::name(self.fresh_id(site), tuple_param.name.as_str());
            let index = Expr::int(self.fresh_id(site), position);
            let item = Expr::app(self.fresh_id(site), access::ITEM, vec![tuple, index]);
            let binding = OpDef {
                id: param.id,
                name: param.name,
                qualifier: Qualifier::Val,
                type_annotation: None,
                expr: item,
                doc: None,
            };
            body = Expr::let_in(self.fresh_id(site), binding, body);
        }

        Expr::lambda(lambda_id, vec![tuple_param], Qualifier::Def, body)
    }
}
