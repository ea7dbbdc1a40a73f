//! Tunable scene parameters and the bounded controls that edit them.
//!
//! [`ConfigurationState`] holds the live [`Configuration`]. It is only changed
//! through [`ConfigurationState::set`], which merges a [`ConfigPatch`], reports
//! what actually changed and notifies subscribed observers. Callers that must act
//! on a change before observers see it use `merge` and `notify` separately.
//! Deciding whether a change needs a regeneration is the caller's job, see
//! [`ConfigChange`].
//!
//! Values are not validated. Out-of-range numbers are stored as-is; the panel
//! keeps them in range with its bounded controls and programmatic callers can use
//! [`ControlSpec::snap`].

use std::fmt::Debug;

/// Snapshot of the tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    /// Radians added to x and y rotation of the rotating kinds every frame.
    pub rotation_speed: f32,
    /// Instances created per populated kind on each regeneration.
    pub number_of_meshes: i32,
    /// Edge length of the cube (centred on the origin) positions are drawn from.
    pub distance_multiplier: f32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            rotation_speed: 0.0015,
            number_of_meshes: 50,
            distance_multiplier: 40.0,
        }
    }
}

impl Configuration {
    /// Number of instances to create per kind; negative counts degrade to zero.
    pub fn meshes_per_kind(&self) -> usize {
        self.number_of_meshes.max(0) as usize
    }

    pub fn apply(&mut self, patch: &ConfigPatch) -> ConfigChange {
        let mut change = ConfigChange::default();
        if let Some(rotation_speed) = patch.rotation_speed {
            change.rotation_speed = rotation_speed != self.rotation_speed;
            self.rotation_speed = rotation_speed;
        }
        if let Some(number_of_meshes) = patch.number_of_meshes {
            change.number_of_meshes = number_of_meshes != self.number_of_meshes;
            self.number_of_meshes = number_of_meshes;
        }
        if let Some(distance_multiplier) = patch.distance_multiplier {
            change.distance_multiplier = distance_multiplier != self.distance_multiplier;
            self.distance_multiplier = distance_multiplier;
        }
        change
    }
}

/// A partial update; `None` leaves the field untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigPatch {
    pub rotation_speed: Option<f32>,
    pub number_of_meshes: Option<i32>,
    pub distance_multiplier: Option<f32>,
}

impl ConfigPatch {
    pub fn rotation_speed(rotation_speed: f32) -> Self {
        Self {
            rotation_speed: Some(rotation_speed),
            ..Default::default()
        }
    }

    pub fn number_of_meshes(number_of_meshes: i32) -> Self {
        Self {
            number_of_meshes: Some(number_of_meshes),
            ..Default::default()
        }
    }

    pub fn distance_multiplier(distance_multiplier: f32) -> Self {
        Self {
            distance_multiplier: Some(distance_multiplier),
            ..Default::default()
        }
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = Some(rotation_speed);
        self
    }

    pub fn with_number_of_meshes(mut self, number_of_meshes: i32) -> Self {
        self.number_of_meshes = Some(number_of_meshes);
        self
    }

    pub fn with_distance_multiplier(mut self, distance_multiplier: f32) -> Self {
        self.distance_multiplier = Some(distance_multiplier);
        self
    }
}

/// Which fields a [`ConfigPatch`] actually changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigChange {
    pub rotation_speed: bool,
    pub number_of_meshes: bool,
    pub distance_multiplier: bool,
}

impl ConfigChange {
    /// Only the spatial parameters invalidate the current population.
    pub fn requires_regeneration(&self) -> bool {
        self.number_of_meshes || self.distance_multiplier
    }

    pub fn is_empty(&self) -> bool {
        !(self.rotation_speed || self.number_of_meshes || self.distance_multiplier)
    }
}

/// Callback invoked after every [`ConfigurationState::set`] or `notify`.
pub type ConfigObserver = Box<dyn FnMut(&Configuration, &ConfigChange)>;

/// The live configuration plus its observers.
pub struct ConfigurationState {
    current: Configuration,
    observers: Vec<ConfigObserver>,
}

impl ConfigurationState {
    pub fn new(config: Configuration) -> Self {
        Self {
            current: config,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> Configuration {
        self.current
    }

    /// Merges `patch` and notifies every observer, even if nothing changed.
    pub fn set(&mut self, patch: &ConfigPatch) -> ConfigChange {
        let change = self.merge(patch);
        self.notify(&change);
        change
    }

    /// Merges `patch` without notifying anyone.
    pub fn merge(&mut self, patch: &ConfigPatch) -> ConfigChange {
        let change = self.current.apply(patch);
        if self.current.number_of_meshes < 0 {
            log::warn!(
                "number of meshes is {}, no instances will be created",
                self.current.number_of_meshes
            );
        }
        change
    }

    /// Calls every observer with the current snapshot and `change`.
    pub fn notify(&mut self, change: &ConfigChange) {
        let current = self.current;
        self.observers
            .iter_mut()
            .for_each(|observer| observer(&current, change));
    }

    pub fn subscribe(&mut self, observer: ConfigObserver) {
        self.observers.push(observer);
    }
}

impl Default for ConfigurationState {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl Debug for ConfigurationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationState")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A bounded numeric control as shown on the tuning panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Whether changing this control regenerates the population.
    pub regenerates: bool,
}

impl ControlSpec {
    /// Clamps `value` into the range and rounds it to the nearest step from `min`.
    pub fn snap(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// The three panel controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    pub rotation_speed: ControlSpec,
    pub number_of_meshes: ControlSpec,
    pub distance_multiplier: ControlSpec,
}

impl Controls {
    pub const PANEL: Controls = Controls {
        rotation_speed: ControlSpec {
            name: "Rotation Speed",
            min: 0.0001,
            max: 0.01,
            step: 0.0001,
            regenerates: false,
        },
        number_of_meshes: ControlSpec {
            name: "Number of Meshes",
            min: 1.0,
            max: 100.0,
            step: 1.0,
            regenerates: true,
        },
        distance_multiplier: ControlSpec {
            name: "Distance Multiplier",
            min: 1.0,
            max: 100.0,
            step: 1.0,
            regenerates: true,
        },
    };

    /// Turns raw slider positions into a patch with every value snapped into range.
    pub fn clamp_patch(&self, patch: &ConfigPatch) -> ConfigPatch {
        ConfigPatch {
            rotation_speed: patch
                .rotation_speed
                .map(|value| self.rotation_speed.snap(value)),
            number_of_meshes: patch
                .number_of_meshes
                .map(|value| self.number_of_meshes.snap(value as f32) as i32),
            distance_multiplier: patch
                .distance_multiplier
                .map(|value| self.distance_multiplier.snap(value)),
        }
    }
}
