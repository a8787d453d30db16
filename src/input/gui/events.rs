/// User events posted to the GUI event loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A render event was handed to the presenter adapter.
    ///
    /// This only marks a redraw as pending; the presenter decides on the next
    /// `RedrawRequested` whether the event is still current.
    Wake,
}
