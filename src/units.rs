#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// Canvas extent used when laying out walls, in whatever unit the consumer draws with.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Width(pub f32);
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Height(pub f32);
