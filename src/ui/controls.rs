use crate::{
    core::{config::PopupPlacementOptions, extent::Extent, geo::Point, view::resolution_for_extent},
    input::events::{InputEvent, PressEvent},
    placement::{is_coordinate_safe, reset_placement, select_placement, PopupLayout},
    ui::{
        popup::{Popup, PopupEvent},
        traits::{Control, MapHost},
    },
    MapError, Result,
};

/// Handle returned by [`DirectionsPopup::on_popup_event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PopupEvent)>;

/// What a press on a directions step did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The coordinate was safe; the popup uses the computed layout
    Placed(PopupLayout),
    /// The coordinate was too close to an edge or corner; the view was
    /// recentered on it and the popup uses the default layout
    Recentered(PopupLayout),
}

impl PressOutcome {
    pub fn layout(&self) -> PopupLayout {
        match self {
            PressOutcome::Placed(layout) | PressOutcome::Recentered(layout) => *layout,
        }
    }
}

/// Shows a popup next to the route step the user pressed, on whichever side
/// keeps it inside the map viewport.
pub struct DirectionsPopup<H: MapHost> {
    options: PopupPlacementOptions,
    popup: Popup,
    host: Option<H>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl<H: MapHost> DirectionsPopup<H> {
    pub fn new() -> Self {
        Self::with_options(PopupPlacementOptions::default())
    }

    pub fn with_options(options: PopupPlacementOptions) -> Self {
        Self {
            options,
            popup: Popup::new(),
            host: None,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn options(&self) -> &PopupPlacementOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PopupPlacementOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// Current layout of the popup
    pub fn layout(&self) -> PopupLayout {
        self.popup.layout()
    }

    /// Closes any open popup and puts the layout back to its default.
    pub fn reset(&mut self) -> PopupLayout {
        self.close_popup();
        self.popup.reset_layout();
        self.popup.layout()
    }

    /// Registers a callback invoked whenever the popup is shown or closed.
    /// Listeners are called in registration order.
    pub fn on_popup_event(&mut self, listener: impl FnMut(&PopupEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Opens the popup for a pressed directions step.
    ///
    /// Safe coordinates get the layout from [`select_placement`]. Others get
    /// the default layout and the host view is recentered on them. Invalid
    /// view state closes any open popup and resets the layout.
    pub fn handle_press(&mut self, press: &PressEvent) -> Result<PressOutcome> {
        let outcome = match self.place(&press.coordinate) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!(
                    "Cannot place popup at ({}, {}): {}",
                    press.coordinate.x,
                    press.coordinate.y,
                    e
                );
                self.reset();
                return Err(e);
            }
        };

        let event = self
            .popup
            .open(press.coordinate, press.content.clone(), outcome.layout());
        self.notify(&event);
        Ok(outcome)
    }

    /// Closes the popup, notifying listeners if it was open
    pub fn close_popup(&mut self) {
        if let Some(event) = self.popup.close() {
            self.notify(&event);
        }
    }

    fn place(&mut self, coordinate: &Point) -> Result<PressOutcome> {
        let options = self.options;
        let host = self.host.as_mut().ok_or(MapError::NotAttached)?;
        let (extent, resolution) = view_state(&*host)?;

        if is_coordinate_safe(&extent, resolution, coordinate, &options)? {
            let layout = select_placement(&extent, resolution, coordinate, &options)?;
            log::debug!(
                "Popup at ({}, {}) placed {}",
                coordinate.x,
                coordinate.y,
                layout.placement
            );
            Ok(PressOutcome::Placed(layout))
        } else {
            log::debug!(
                "Popup at ({}, {}) is unsafe, recentering view",
                coordinate.x,
                coordinate.y
            );
            host.set_center(*coordinate);
            Ok(PressOutcome::Recentered(reset_placement()))
        }
    }

    fn notify(&mut self, event: &PopupEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

/// Visible extent and resolution of a host, deriving the resolution from the
/// viewport size when the host does not report one
fn view_state<H: MapHost + ?Sized>(host: &H) -> Result<(Extent, f64)> {
    let extent = host.viewport_extent();
    let resolution = match host.resolution() {
        Some(resolution) => resolution,
        None => resolution_for_extent(&extent, host.size())?,
    };
    Ok((extent, resolution))
}

impl<H: MapHost> Control<H> for DirectionsPopup<H> {
    /// Attaching while attached replaces the previous host and closes the
    /// popup shown on it
    fn attach(&mut self, host: H) {
        if self.host.is_some() {
            log::debug!("Replacing directions popup host");
            self.close_popup();
        }
        self.popup.reset_layout();
        self.host = Some(host);
    }

    fn detach(&mut self) -> Option<H> {
        self.close_popup();
        self.popup.reset_layout();
        self.host.take()
    }

    fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    fn handle_event(&mut self, event: &InputEvent) -> Result<()> {
        match event {
            InputEvent::Press(press) => self.handle_press(press).map(|_| ()),
            InputEvent::SingleClick { .. } => {
                self.close_popup();
                Ok(())
            }
        }
    }
}

impl<H: MapHost> Default for DirectionsPopup<H> {
    fn default() -> Self {
        Self::new()
    }
}
