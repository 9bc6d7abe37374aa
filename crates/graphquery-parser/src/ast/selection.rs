use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;

/// One item of a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
