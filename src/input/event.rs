/// Platform-agnostic input events.
///
/// These are fed into
/// [`GalleryEngine::handle_event`](crate::engine::GalleryEngine::handle_event),
/// which routes them to the pointer sampler and the viewport tracker.
///
/// # Example
///
/// ```ignore
/// let wants_frame = engine.handle_event(
///     InputEvent::PointerMoved { x: 100.0, y: 200.0 },
///     Instant::now(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an absolute viewport position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The viewport was resized.
    Resized {
        /// New width in physical pixels.
        width: f32,
        /// New height in physical pixels.
        height: f32,
    },
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Convert a winit window event into an engine event, if it is one the
    /// pipeline reacts to.
    pub fn from_winit(event: &winit::event::WindowEvent) -> Option<Self> {
        match event {
            winit::event::WindowEvent::CursorMoved { position, .. } => {
                Some(Self::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            winit::event::WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),
            _ => None,
        }
    }
}
