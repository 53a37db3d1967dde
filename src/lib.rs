#![no_std]
#![cfg_attr(not(doctest), doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md")))]

pub mod endian;
pub mod mma8451q;
pub mod mpu6050;
pub mod registers;

pub use mma8451q::Mma8451q;
pub use mpu6050::Mpu6050;

/// 7-bit bus address type used throughout the register layer.
pub type DeviceAddr = u8;

/// 7-bit bus address of the MMA8451Q (SA0 pin high, the FRDM-KL25Z wiring).
pub const MMA8451Q_ADDR: DeviceAddr = 0x1D;

/// State of the MPU6050 AD0 address strap.
///
/// The strap selects between bus addresses 0x68 and 0x69 and is fixed by the
/// board layout, so it is a compile-time constant rather than a runtime
/// parameter.
pub const MPU6050_AD0: u8 = 0b1;

/// 7-bit bus address of the MPU6050 (`0b110100x`, `x` = AD0 strap).
pub const MPU6050_ADDR: DeviceAddr = 0b110_1000 | MPU6050_AD0;

/// Expected value of the MMA8451Q `WHO_AM_I` register.
pub const MMA8451Q_WHO_AM_I: u8 = 0x1A;

/// Expected value of the MPU6050 `WHO_AM_I` register.
pub const MPU6050_WHO_AM_I: u8 = 0x68;

/// Driver errors
///
/// Plain register access propagates the bus error type unchanged; this enum
/// only exists for operations that can fail for a reason of their own, such
/// as identity verification.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// The `WHO_AM_I` register did not contain the documented identification
    /// code (contains the value actually read)
    UnknownDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
