/// Events emitted while a curve is being exported that exporters can handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    /// Export started
    Started,

    /// A batch of segments has been written
    Progress { written: usize },

    /// Every segment has been written
    Completed,
}
