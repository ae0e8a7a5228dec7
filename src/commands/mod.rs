pub type CmdResult<T> = forui_migrate::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod migrate;
