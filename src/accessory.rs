//! Lightbulb service write handling
//!
//! Entry point for the accessory layer. A batch of characteristic writes
//! is applied in order, every write gets its own status, and accepted
//! values are mirrored into the [`CharacteristicStore`].

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::String;

use crate::StripOutput;
use crate::controller::LightController;
use crate::error::{LightError, WriteError};
use crate::state::LightState;

/// Maximum length of the user visible service name
pub const MAX_NAME_LEN: usize = 32;

/// Default user visible service name
pub const DEFAULT_NAME: &str = "My Light";

const UUID_ON: &str = "25";
const UUID_BRIGHTNESS: &str = "8";
const UUID_HUE: &str = "13";
const UUID_SATURATION: &str = "2F";
const UUID_NAME: &str = "23";

/// Suffix of the full form of accessory protocol UUIDs
const UUID_BASE_SUFFIX: &str = "-0000-1000-8000-0026BB765291";

/// Characteristics of the lightbulb service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Characteristic {
    On,
    Brightness,
    Hue,
    Saturation,
    /// Read-only user visible name
    Name,
}

impl Characteristic {
    /// Resolve a characteristic from its type UUID
    ///
    /// Accepts the short form (`"25"`) as well as the full form
    /// (`"00000025-0000-1000-8000-0026BB765291"`), case-insensitive.
    pub fn from_uuid(uuid: &str) -> Option<Self> {
        let short = short_uuid(uuid)?;
        [
            (UUID_ON, Self::On),
            (UUID_BRIGHTNESS, Self::Brightness),
            (UUID_HUE, Self::Hue),
            (UUID_SATURATION, Self::Saturation),
            (UUID_NAME, Self::Name),
        ]
        .into_iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(short))
        .map(|(_, characteristic)| characteristic)
    }

    /// Short type UUID
    pub const fn uuid(self) -> &'static str {
        match self {
            Self::On => UUID_ON,
            Self::Brightness => UUID_BRIGHTNESS,
            Self::Hue => UUID_HUE,
            Self::Saturation => UUID_SATURATION,
            Self::Name => UUID_NAME,
        }
    }

    /// Returns true if the accessory layer may write the characteristic
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::Name)
    }
}

/// Strip the full UUID form down to the short one, without leading zeros
fn short_uuid(uuid: &str) -> Option<&str> {
    let short = match uuid.len().checked_sub(UUID_BASE_SUFFIX.len()) {
        Some(split) if split > 0 && uuid.is_char_boundary(split) => {
            let (head, tail) = uuid.split_at(split);
            if tail.eq_ignore_ascii_case(UUID_BASE_SUFFIX) { head } else { uuid }
        }
        _ => uuid,
    };
    let short = short.trim_start_matches('0');
    if short.is_empty() { None } else { Some(short) }
}

/// Typed characteristic value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacteristicValue {
    Bool(bool),
    Int(i32),
    Float(f32),
}

/// Per-write status reported back to the accessory layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStatus {
    Success,
    /// Value was rejected
    #[default]
    InvalidValue,
    /// Characteristic is unknown or can not be written
    ResourceAbsent,
    /// Strip output failed while applying the value
    CommunicationError,
}

/// A single characteristic write
#[derive(Debug, Clone, Copy)]
pub struct WriteRequest<'a> {
    /// Characteristic type UUID
    pub uuid: &'a str,
    pub value: CharacteristicValue,
    /// Filled in by [`LightbulbService::handle_writes`]
    pub status: WriteStatus,
}

impl<'a> WriteRequest<'a> {
    pub const fn new(uuid: &'a str, value: CharacteristicValue) -> Self {
        Self {
            uuid,
            value,
            status: WriteStatus::InvalidValue,
        }
    }

    /// Create a write addressed to a known characteristic
    pub const fn to(characteristic: Characteristic, value: CharacteristicValue) -> Self {
        Self::new(characteristic.uuid(), value)
    }
}

/// Last accepted characteristic values, as seen by the accessory layer
#[derive(Debug, Clone)]
pub struct CharacteristicStore {
    name: String<MAX_NAME_LEN>,
    on: bool,
    brightness: i32,
    hue: f32,
    saturation: f32,
}

impl CharacteristicStore {
    /// Create a store reflecting the given light state
    ///
    /// Names longer than [`MAX_NAME_LEN`] are truncated.
    pub fn new(name: &str, state: &LightState) -> Self {
        let mut stored = String::new();
        for c in name.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        Self {
            name: stored,
            on: state.is_on(),
            brightness: i32::from(state.saved_brightness()),
            hue: state.hue(),
            saturation: state.saturation(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read a characteristic value
    ///
    /// Returns `None` for the name, which is not a numeric value.
    pub fn value(&self, characteristic: Characteristic) -> Option<CharacteristicValue> {
        Some(match characteristic {
            Characteristic::On => CharacteristicValue::Bool(self.on),
            Characteristic::Brightness => CharacteristicValue::Int(self.brightness),
            Characteristic::Hue => CharacteristicValue::Float(self.hue),
            Characteristic::Saturation => CharacteristicValue::Float(self.saturation),
            Characteristic::Name => return None,
        })
    }

    /// Mirror an accepted write, using the values the light applied
    fn update(&mut self, characteristic: Characteristic, state: &LightState) {
        match characteristic {
            Characteristic::On => self.on = state.is_on(),
            Characteristic::Brightness => {
                self.brightness = i32::from(state.saved_brightness());
            }
            Characteristic::Hue => self.hue = state.hue(),
            Characteristic::Saturation => self.saturation = state.saturation(),
            Characteristic::Name => {}
        }
    }
}

/// Lightbulb service - dispatches characteristic writes to the controller
pub struct LightbulbService<O: StripOutput> {
    controller: LightController<O>,
    store: CharacteristicStore,
}

impl<O: StripOutput> LightbulbService<O> {
    /// Create a new service with the given user visible name
    pub fn new(controller: LightController<O>, name: &str) -> Self {
        let store = CharacteristicStore::new(name, &controller.state());
        Self { controller, store }
    }

    /// Initialize the light hardware
    pub fn init(&mut self) -> Result<(), LightError> {
        self.controller.init()
    }

    /// Release the light hardware
    pub fn deinit(&mut self) -> Result<(), LightError> {
        self.controller.deinit()
    }

    /// Accessory identify routine
    pub fn identify(&mut self) -> Result<(), LightError> {
        #[cfg(feature = "esp32-log")]
        println!("[LightbulbService.identify] accessory identified");
        Ok(())
    }

    /// Apply a batch of writes in order
    ///
    /// Every request gets its status filled in. Returns an error if any
    /// write did not succeed; the remaining writes are still applied.
    pub fn handle_writes(&mut self, requests: &mut [WriteRequest<'_>]) -> Result<(), WriteError> {
        let mut failed = 0;
        for request in requests.iter_mut() {
            request.status = self.handle_write(request.uuid, request.value);
            if request.status != WriteStatus::Success {
                failed += 1;
            }
        }

        if failed == 0 {
            Ok(())
        } else {
            Err(WriteError { failed })
        }
    }

    fn handle_write(&mut self, uuid: &str, value: CharacteristicValue) -> WriteStatus {
        let Some(characteristic) = Characteristic::from_uuid(uuid).filter(|c| c.is_writable())
        else {
            #[cfg(feature = "esp32-log")]
            println!("[LightbulbService.handle_write] unknown characteristic {}", uuid);
            return WriteStatus::ResourceAbsent;
        };

        #[cfg(feature = "esp32-log")]
        println!(
            "[LightbulbService.handle_write] {:?} <- {:?}",
            characteristic, value
        );

        let result = match (characteristic, value) {
            (Characteristic::On, CharacteristicValue::Bool(on)) => self.controller.set_on(on),
            (Characteristic::Brightness, CharacteristicValue::Int(brightness)) => {
                self.controller.set_brightness(brightness)
            }
            (Characteristic::Hue, CharacteristicValue::Float(hue)) => self.controller.set_hue(hue),
            (Characteristic::Saturation, CharacteristicValue::Float(saturation)) => {
                self.controller.set_saturation(saturation)
            }
            _ => return WriteStatus::InvalidValue,
        };

        match result {
            Ok(()) => {
                self.store.update(characteristic, &self.controller.state());
                WriteStatus::Success
            }
            Err(LightError::InvalidValue) => WriteStatus::InvalidValue,
            Err(LightError::Output(_)) => WriteStatus::CommunicationError,
        }
    }

    /// Get the characteristic store
    pub const fn store(&self) -> &CharacteristicStore {
        &self.store
    }

    /// Get a reference to the controller
    pub const fn controller(&self) -> &LightController<O> {
        &self.controller
    }

    /// Get a mutable reference to the controller
    ///
    /// Changes made through the controller are not mirrored into the store.
    pub fn controller_mut(&mut self) -> &mut LightController<O> {
        &mut self.controller
    }
}
