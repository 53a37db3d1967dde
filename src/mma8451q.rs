//! MMA8451Q 3-axis accelerometer driver.
//!
//! The device runs in 14-bit, no-FIFO mode: samples are left-justified in
//! their 16-bit register pairs with two padding bits, so the decoder shifts
//! them right arithmetically after the byte-order correction.

use bilge::prelude::*;
use embedded_hal::i2c::I2c;

use crate::endian::wire16;
use crate::registers::{mma8451q as regs, Register, Registers};
use crate::{Error, MMA8451Q_ADDR, MMA8451Q_WHO_AM_I};

/// Output data rate (CTRL_REG1 `DR` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataRate {
    /// 800 Hz
    Hz800 = 0b000,
    /// 400 Hz
    Hz400 = 0b001,
    /// 200 Hz
    Hz200 = 0b010,
    /// 100 Hz
    Hz100 = 0b011,
    /// 50 Hz
    Hz50 = 0b100,
    /// 12.5 Hz
    Hz12_5 = 0b101,
    /// 6.25 Hz
    Hz6_25 = 0b110,
    /// 1.56 Hz
    Hz1_56 = 0b111,
}

/// Noise mode (CTRL_REG1 `LNOISE` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum NoiseMode {
    /// Normal operation
    Normal = 0,
    /// Reduced noise, reduced full-scale range
    Reduced = 1,
}

/// Active-mode oversampling (CTRL_REG2 `MODS` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Oversampling {
    /// Normal power and noise
    Normal = 0b00,
    /// Low noise, low power
    LowNoiseLowPower = 0b01,
    /// High resolution
    HighResolution = 0b10,
    /// Low power
    LowPower = 0b11,
}

/// Full-scale range (XYZ_DATA_CFG `FS` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Sensitivity {
    /// ±2 g
    G2 = 0b00,
    /// ±4 g
    G4 = 0b01,
    /// ±8 g
    G8 = 0b10,
}

/// Output high-pass filter (XYZ_DATA_CFG `HPF_OUT` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HighPass {
    /// Output data bypasses the high-pass filter
    Bypassed = 0,
    /// Output data is high-pass filtered
    Enabled = 1,
}

/// Interrupt pad drive mode (CTRL_REG3 `PP_OD` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinDrive {
    /// Push-pull output
    PushPull = 0,
    /// Open-drain output
    OpenDrain = 1,
}

/// Interrupt polarity (CTRL_REG3 `IPOL` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Polarity {
    /// Interrupt pads are active low
    ActiveLow = 0,
    /// Interrupt pads are active high
    ActiveHigh = 1,
}

/// Interrupt sources of the MMA8451Q
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptSource {
    /// New sample available
    DataReady,
    /// Freefall/motion event
    FreefallMotion,
    /// Single or double pulse event
    Pulse,
    /// Landscape/portrait orientation change
    Orientation,
    /// Transient acceleration event
    Transient,
    /// Auto-sleep/wake transition
    AutoSleep,
}

/// Physical interrupt output pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPin {
    /// INT1 pad (the default routing)
    Int1,
    /// INT2 pad
    Int2,
}

/// Contents of the STATUS register captured with a sample burst.
#[bitsize(8)]
#[derive(Clone, Copy, DebugBits, FromBits, PartialEq)]
pub struct DataStatus {
    /// X-axis new data available
    pub xdr: u1,
    /// Y-axis new data available
    pub ydr: u1,
    /// Z-axis new data available
    pub zdr: u1,
    /// New data available on any axis
    pub zyxdr: u1,
    /// X-axis data overwritten before read
    pub xow: u1,
    /// Y-axis data overwritten before read
    pub yow: u1,
    /// Z-axis data overwritten before read
    pub zow: u1,
    /// Data overwrite on any axis
    pub zyxow: u1,
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "DataStatus {{ zyxow: {}, zyxdr: {}, x: {}/{}, y: {}/{}, z: {}/{} }}",
            self.zyxow().value(),
            self.zyxdr().value(),
            self.xdr().value(),
            self.xow().value(),
            self.ydr().value(),
            self.yow().value(),
            self.zdr().value(),
            self.zow().value(),
        );
    }
}

/// One accelerometer sample, captured in a single bus transaction.
///
/// Axis values are right-aligned, sign-correct 14-bit readings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// Status register contents at capture time
    pub status: DataStatus,
    /// X-axis reading
    pub x: i16,
    /// Y-axis reading
    pub y: i16,
    /// Z-axis reading
    pub z: i16,
}

/// Snapshot of the MMA8451Q configuration registers.
///
/// Field order matches ascending register addresses. The configuration space
/// consists of two contiguous runs, 0x09..=0x18 and 0x1D..=0x31, separated by
/// reserved addresses that are never accessed. Read-only registers are
/// populated by [`Mma8451q::fetch_configuration`] but never transmitted by
/// [`Mma8451q::store_configuration`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mma8451qConfig {
    /// F_SETUP (0x09)
    pub f_setup: u8,
    /// TRIG_CFG (0x0A)
    pub trig_cfg: u8,
    /// SYSMOD (0x0B), read-only
    pub sysmod: u8,
    /// INT_SOURCE (0x0C), read-only
    pub int_source: u8,
    /// WHO_AM_I (0x0D), read-only
    pub who_am_i: u8,
    /// XYZ_DATA_CFG (0x0E)
    pub xyz_data_cfg: u8,
    /// HP_FILTER_CUTOFF (0x0F)
    pub hp_filter_cutoff: u8,
    /// PL_STATUS (0x10), read-only
    pub pl_status: u8,
    /// PL_CFG (0x11)
    pub pl_cfg: u8,
    /// PL_COUNT (0x12)
    pub pl_count: u8,
    /// PL_BF_ZCOMP (0x13)
    pub pl_bf_zcomp: u8,
    /// PL_THS_REG (0x14)
    pub pl_ths_reg: u8,
    /// FF_MT_CFG (0x15)
    pub ff_mt_cfg: u8,
    /// FF_MT_SRC (0x16), read-only
    pub ff_mt_src: u8,
    /// FF_MT_THS (0x17)
    pub ff_mt_ths: u8,
    /// FF_MT_COUNT (0x18)
    pub ff_mt_count: u8,
    /// TRANSIENT_CFG (0x1D)
    pub transient_cfg: u8,
    /// TRANSIENT_SRC (0x1E), read-only
    pub transient_src: u8,
    /// TRANSIENT_THS (0x1F)
    pub transient_ths: u8,
    /// TRANSIENT_COUNT (0x20)
    pub transient_count: u8,
    /// PULSE_CFG (0x21)
    pub pulse_cfg: u8,
    /// PULSE_SRC (0x22), read-only
    pub pulse_src: u8,
    /// PULSE_THSX (0x23)
    pub pulse_thsx: u8,
    /// PULSE_THSY (0x24)
    pub pulse_thsy: u8,
    /// PULSE_THSZ (0x25)
    pub pulse_thsz: u8,
    /// PULSE_TMLT (0x26)
    pub pulse_tmlt: u8,
    /// PULSE_LTCY (0x27)
    pub pulse_ltcy: u8,
    /// PULSE_WIND (0x28)
    pub pulse_wind: u8,
    /// ASLP_COUNT (0x29)
    pub aslp_count: u8,
    /// CTRL_REG1 (0x2A)
    pub ctrl_reg1: u8,
    /// CTRL_REG2 (0x2B)
    pub ctrl_reg2: u8,
    /// CTRL_REG3 (0x2C)
    pub ctrl_reg3: u8,
    /// CTRL_REG4 (0x2D)
    pub ctrl_reg4: u8,
    /// CTRL_REG5 (0x2E)
    pub ctrl_reg5: u8,
    /// OFF_X (0x2F)
    pub off_x: u8,
    /// OFF_Y (0x30)
    pub off_y: u8,
    /// OFF_Z (0x31)
    pub off_z: u8,
}

/// MMA8451Q driver
pub struct Mma8451q<BUS> {
    bus: BUS,
}

impl<BUS> Mma8451q<BUS> {
    /// Create a new driver instance taking ownership of the bus.
    pub fn new(bus: BUS) -> Self {
        Mma8451q { bus }
    }

    /// Low-level access to the device's register file
    pub fn regs(&mut self) -> Registers<'_, BUS, { MMA8451Q_ADDR }> {
        Registers::new(&mut self.bus)
    }

    /// Release the bus from the driver instance
    pub fn release(self) -> BUS {
        self.bus
    }
}

impl<BUS> Mma8451q<BUS>
where
    BUS: I2c,
{
    /// Reads the device identification code.
    ///
    /// A correctly wired device answers 0x1A; bus failures propagate as
    /// errors rather than a garbage code. Safe to call at any time.
    pub fn who_am_i(&mut self) -> Result<u8, BUS::Error> {
        Ok(self.regs().who_am_i().read()?.value())
    }

    /// Checks the identification code against the documented value.
    pub fn verify_identity(&mut self) -> Result<(), Error<BUS::Error>> {
        let id = self.who_am_i()?;
        if id != MMA8451Q_WHO_AM_I {
            return Err(Error::UnknownDevice(id));
        }
        Ok(())
    }

    /// Reads the current system mode (standby, wake or sleep).
    pub fn system_mode(&mut self) -> Result<u8, BUS::Error> {
        Ok(self.regs().sysmod().read()?.sysmod())
    }

    /// Reads the raw landscape/portrait configuration register.
    pub fn landscape_portrait_config(&mut self) -> Result<u8, BUS::Error> {
        Ok(self.regs().pl_cfg().read()?.bits())
    }

    /// Sets the output data rate and the noise mode.
    ///
    /// Only the `DR` and `LNOISE` fields of CTRL_REG1 are touched; the
    /// active-mode and auto-sleep bits keep their current values.
    pub fn set_data_rate(&mut self, rate: DataRate, noise: NoiseMode) -> Result<(), BUS::Error> {
        self.regs()
            .ctrl_reg1()
            .modify(|_, w| w.dr(rate as u8).lnoise(noise as u8))
    }

    /// Sets the active-mode oversampling mode.
    pub fn set_oversampling(&mut self, mode: Oversampling) -> Result<(), BUS::Error> {
        self.regs().ctrl_reg2().modify(|_, w| w.mods(mode as u8))
    }

    /// Sets the full-scale range and the output high-pass filter.
    ///
    /// XYZ_DATA_CFG holds no other documented fields, so this is a full
    /// register write rather than a read-modify-write.
    pub fn set_sensitivity(
        &mut self,
        sensitivity: Sensitivity,
        high_pass: HighPass,
    ) -> Result<(), BUS::Error> {
        self.regs()
            .xyz_data_cfg()
            .write(|w| w.fs(sensitivity as u8).hpf_out(high_pass as u8))
    }

    /// Sets the drive mode and polarity of the interrupt pads.
    pub fn set_interrupt_mode(
        &mut self,
        drive: PinDrive,
        polarity: Polarity,
    ) -> Result<(), BUS::Error> {
        self.regs()
            .ctrl_reg3()
            .modify(|_, w| w.pp_od(drive as u8).ipol(polarity as u8))
    }

    /// Routes an interrupt source to an output pin and enables it.
    ///
    /// Two independent register updates, in order: the routing register
    /// (CTRL_REG5), then the enable register (CTRL_REG4). A clear routing
    /// bit selects INT1 (the power-on default), a set bit selects INT2, so
    /// the update polarity depends on the requested pin. Either way only
    /// this source's bit is touched; other sources keep their routing.
    pub fn configure_interrupt(
        &mut self,
        source: InterruptSource,
        pin: InterruptPin,
    ) -> Result<(), BUS::Error> {
        let routed = match pin {
            InterruptPin::Int1 => 0,
            InterruptPin::Int2 => 1,
        };

        self.regs().ctrl_reg5().modify(|_, w| match source {
            InterruptSource::DataReady => w.int_cfg_drdy(routed),
            InterruptSource::FreefallMotion => w.int_cfg_ff_mt(routed),
            InterruptSource::Pulse => w.int_cfg_pulse(routed),
            InterruptSource::Orientation => w.int_cfg_lndprt(routed),
            InterruptSource::Transient => w.int_cfg_trans(routed),
            InterruptSource::AutoSleep => w.int_cfg_aslp(routed),
        })?;

        self.regs().ctrl_reg4().modify(|_, w| match source {
            InterruptSource::DataReady => w.int_en_drdy(1),
            InterruptSource::FreefallMotion => w.int_en_ff_mt(1),
            InterruptSource::Pulse => w.int_en_pulse(1),
            InterruptSource::Orientation => w.int_en_lndprt(1),
            InterruptSource::Transient => w.int_en_trans(1),
            InterruptSource::AutoSleep => w.int_en_aslp(1),
        })
    }

    /// Disables all interrupts and restores the default routing.
    ///
    /// Both governing registers are overwritten with literal zero, the
    /// device's "no interrupts enabled" state; prior contents are not read.
    pub fn clear_interrupt_configuration(&mut self) -> Result<(), BUS::Error> {
        self.regs().ctrl_reg4().write(|w| w)?;
        self.regs().ctrl_reg5().write(|w| w)
    }

    /// Reads one sample in 14-bit, no-FIFO mode.
    ///
    /// The status register and all six data bytes are captured in a single
    /// burst so the three axes stay coherent across a sensor update
    /// boundary; three separate reads could observe torn data.
    pub fn read_acceleration(&mut self) -> Result<Acceleration, BUS::Error> {
        let mut buffer = [0u8; 7];
        self.bus
            .write_read(MMA8451Q_ADDR, &[regs::STATUS::ADDR], &mut buffer)?;

        Ok(Acceleration {
            status: DataStatus::from(buffer[0]),
            x: axis_14bit(buffer[1], buffer[2]),
            y: axis_14bit(buffer[3], buffer[4]),
            z: axis_14bit(buffer[5], buffer[6]),
        })
    }

    /// Fetches the device configuration into `config`.
    ///
    /// Each contiguous run of the configuration space is read in one burst;
    /// the reserved gap at 0x19..=0x1C is never accessed. On failure the
    /// aggregate contents are undefined.
    pub fn fetch_configuration(&mut self, config: &mut Mma8451qConfig) -> Result<(), BUS::Error> {
        let mut run_a = [0u8; 16];
        self.bus
            .write_read(MMA8451Q_ADDR, &[regs::F_SETUP::ADDR], &mut run_a)?;

        let mut run_b = [0u8; 21];
        self.bus
            .write_read(MMA8451Q_ADDR, &[regs::TRANSIENT_CFG::ADDR], &mut run_b)?;

        let [f_setup, trig_cfg, sysmod, int_source, who_am_i, xyz_data_cfg, hp_filter_cutoff, pl_status, pl_cfg, pl_count, pl_bf_zcomp, pl_ths_reg, ff_mt_cfg, ff_mt_src, ff_mt_ths, ff_mt_count] =
            run_a;
        let [transient_cfg, transient_src, transient_ths, transient_count, pulse_cfg, pulse_src, pulse_thsx, pulse_thsy, pulse_thsz, pulse_tmlt, pulse_ltcy, pulse_wind, aslp_count, ctrl_reg1, ctrl_reg2, ctrl_reg3, ctrl_reg4, ctrl_reg5, off_x, off_y, off_z] =
            run_b;

        *config = Mma8451qConfig {
            f_setup,
            trig_cfg,
            sysmod,
            int_source,
            who_am_i,
            xyz_data_cfg,
            hp_filter_cutoff,
            pl_status,
            pl_cfg,
            pl_count,
            pl_bf_zcomp,
            pl_ths_reg,
            ff_mt_cfg,
            ff_mt_src,
            ff_mt_ths,
            ff_mt_count,
            transient_cfg,
            transient_src,
            transient_ths,
            transient_count,
            pulse_cfg,
            pulse_src,
            pulse_thsx,
            pulse_thsy,
            pulse_thsz,
            pulse_tmlt,
            pulse_ltcy,
            pulse_wind,
            aslp_count,
            ctrl_reg1,
            ctrl_reg2,
            ctrl_reg3,
            ctrl_reg4,
            ctrl_reg5,
            off_x,
            off_y,
            off_z,
        };

        Ok(())
    }

    /// Stores every writable register of `config` back to the device.
    ///
    /// Each maximal run of writable registers goes out as one burst;
    /// read-only registers are never transmitted. The bus gives no
    /// atomicity across bursts, so a failure can leave the device
    /// partially updated; no rollback is attempted.
    pub fn store_configuration(&mut self, config: &Mma8451qConfig) -> Result<(), BUS::Error> {
        self.bus.write(
            MMA8451Q_ADDR,
            &[regs::F_SETUP::ADDR, config.f_setup, config.trig_cfg],
        )?;
        // SYSMOD, INT_SOURCE and WHO_AM_I are read-only
        self.bus.write(
            MMA8451Q_ADDR,
            &[
                regs::XYZ_DATA_CFG::ADDR,
                config.xyz_data_cfg,
                config.hp_filter_cutoff,
            ],
        )?;
        // PL_STATUS is read-only
        self.bus.write(
            MMA8451Q_ADDR,
            &[
                regs::PL_CFG::ADDR,
                config.pl_cfg,
                config.pl_count,
                config.pl_bf_zcomp,
                config.pl_ths_reg,
                config.ff_mt_cfg,
            ],
        )?;
        // FF_MT_SRC is read-only
        self.bus.write(
            MMA8451Q_ADDR,
            &[regs::FF_MT_THS::ADDR, config.ff_mt_ths, config.ff_mt_count],
        )?;
        self.bus
            .write(MMA8451Q_ADDR, &[regs::TRANSIENT_CFG::ADDR, config.transient_cfg])?;
        // TRANSIENT_SRC is read-only
        self.bus.write(
            MMA8451Q_ADDR,
            &[
                regs::TRANSIENT_THS::ADDR,
                config.transient_ths,
                config.transient_count,
                config.pulse_cfg,
            ],
        )?;
        // PULSE_SRC is read-only
        self.bus.write(
            MMA8451Q_ADDR,
            &[
                regs::PULSE_THSX::ADDR,
                config.pulse_thsx,
                config.pulse_thsy,
                config.pulse_thsz,
                config.pulse_tmlt,
                config.pulse_ltcy,
                config.pulse_wind,
                config.aslp_count,
                config.ctrl_reg1,
                config.ctrl_reg2,
                config.ctrl_reg3,
                config.ctrl_reg4,
                config.ctrl_reg5,
                config.off_x,
                config.off_y,
                config.off_z,
            ],
        )
    }
}

/// Converts one left-justified 14-bit sample into a right-aligned value.
///
/// The arithmetic shift keeps the sign of negative readings intact.
fn axis_14bit(high: u8, low: u8) -> i16 {
    (wire16(high, low) as i16) >> 2
}

#[cfg(test)]
mod test {
    extern crate alloc;
    use alloc::vec;

    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal::i2c::ErrorKind;

    use super::*;

    #[test]
    fn who_am_i_returns_identification_code() {
        let expectations = [I2cTransaction::write_read(
            MMA8451Q_ADDR,
            vec![0x0D],
            vec![0x1A],
        )];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        assert_eq!(acc.who_am_i().unwrap(), 0x1A);
        acc.release().done();

        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x0D], vec![0x1A]),
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x0D], vec![0x2A]),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));
        assert_eq!(acc.verify_identity(), Ok(()));
        assert_eq!(acc.verify_identity(), Err(Error::UnknownDevice(0x2A)));

        acc.release().done();
    }

    #[test]
    fn who_am_i_surfaces_bus_errors() {
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x0D], vec![0x00])
                .with_error(ErrorKind::Other),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        assert!(acc.who_am_i().is_err());

        acc.release().done();
    }

    #[test]
    fn data_rate_update_preserves_unrelated_bits() {
        // ACTIVE, F_READ and ASLP_RATE bits survive the update untouched.
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2A], vec![0b1100_0011]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2A, 0b1101_1111]),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        acc.set_data_rate(DataRate::Hz100, NoiseMode::Reduced)
            .unwrap();

        acc.release().done();
    }

    #[test]
    fn data_rate_update_is_idempotent() {
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2A], vec![0b0000_0000]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2A, 0b0001_1100]),
            // Second call observes the first call's result and rewrites it.
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2A], vec![0b0001_1100]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2A, 0b0001_1100]),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        acc.set_data_rate(DataRate::Hz100, NoiseMode::Reduced)
            .unwrap();
        acc.set_data_rate(DataRate::Hz100, NoiseMode::Reduced)
            .unwrap();

        acc.release().done();
    }

    #[test]
    fn oversampling_touches_only_mods_field() {
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2B], vec![0b1101_1100]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2B, 0b1101_1110]),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        acc.set_oversampling(Oversampling::HighResolution).unwrap();

        acc.release().done();
    }

    #[test]
    fn sensitivity_is_a_full_register_write() {
        let expectations = [I2cTransaction::write(MMA8451Q_ADDR, vec![0x0E, 0b0001_0001])];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        acc.set_sensitivity(Sensitivity::G4, HighPass::Enabled)
            .unwrap();

        acc.release().done();
    }

    #[test]
    fn interrupt_routing_polarity_depends_on_pin() {
        // Pin 1 clears the source's routing bit, pin 2 sets it; bits of
        // other sources survive both updates.
        let expectations = [
            // route Transient to INT1: bit 5 cleared, rest preserved
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2E], vec![0b1010_1101]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2E, 0b1000_1101]),
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2D], vec![0b0000_0000]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2D, 0b0010_0000]),
            // route Transient to INT2: bit 5 set, rest preserved
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2E], vec![0b1000_1101]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2E, 0b1010_1101]),
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2D], vec![0b0010_0000]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2D, 0b0010_0000]),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        acc.configure_interrupt(InterruptSource::Transient, InterruptPin::Int1)
            .unwrap();
        acc.configure_interrupt(InterruptSource::Transient, InterruptPin::Int2)
            .unwrap();

        acc.release().done();
    }

    #[test]
    fn configure_interrupt_enables_after_routing() {
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2E], vec![0x00]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2E, 0b0000_0001]),
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2D], vec![0b0000_0100]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2D, 0b0000_0101]),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        acc.configure_interrupt(InterruptSource::DataReady, InterruptPin::Int2)
            .unwrap();

        acc.release().done();
    }

    #[test]
    fn clear_interrupt_configuration_writes_literal_zero() {
        // No reads: the registers are overwritten no matter what they held.
        let expectations = [
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2D, 0x00]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2E, 0x00]),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        acc.clear_interrupt_configuration().unwrap();

        acc.release().done();
    }

    #[test]
    fn acceleration_decode_swaps_and_shifts_with_sign() {
        // Raw big-endian axes X=0x1234, Y=0xFFF0 (negative), Z=0x0004.
        let expectations = [I2cTransaction::write_read(
            MMA8451Q_ADDR,
            vec![0x00],
            vec![0x0F, 0x12, 0x34, 0xFF, 0xF0, 0x00, 0x04],
        )];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        let sample = acc.read_acceleration().unwrap();
        assert_eq!(sample.status.zyxdr().value(), 1);
        assert_eq!(sample.x, 0x048D);
        // Arithmetic shift must sign-extend: 0xFFF0 >> 2 == -4, not 0x3FFC.
        assert_eq!(sample.y, -4);
        assert_eq!(sample.z, 0x0001);

        acc.release().done();
    }

    #[test]
    fn fetch_populates_fields_in_address_order() {
        let run_a: vec::Vec<u8> = (0x10..0x20).collect();
        let run_b: vec::Vec<u8> = (0x30..0x45).collect();
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x09], run_a),
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x1D], run_b),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        let mut config = Mma8451qConfig::default();
        acc.fetch_configuration(&mut config).unwrap();

        assert_eq!(config.f_setup, 0x10);
        assert_eq!(config.who_am_i, 0x14);
        assert_eq!(config.pl_status, 0x17);
        assert_eq!(config.ff_mt_count, 0x1F);
        assert_eq!(config.transient_cfg, 0x30);
        assert_eq!(config.pulse_src, 0x35);
        assert_eq!(config.ctrl_reg1, 0x3D);
        assert_eq!(config.off_z, 0x44);

        acc.release().done();
    }

    #[test]
    fn fetch_store_round_trip_skips_read_only_registers() {
        let run_a: vec::Vec<u8> = (0x10..0x20).collect();
        let run_b: vec::Vec<u8> = (0x30..0x45).collect();
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x09], run_a),
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x1D], run_b),
            // Writable sub-runs only; SYSMOD, INT_SOURCE, WHO_AM_I,
            // PL_STATUS, FF_MT_SRC, TRANSIENT_SRC and PULSE_SRC never
            // appear in a write.
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x09, 0x10, 0x11]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x0E, 0x15, 0x16]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x11, 0x18, 0x19, 0x1A, 0x1B, 0x1C]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x17, 0x1E, 0x1F]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x1D, 0x30]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x1F, 0x32, 0x33, 0x34]),
            I2cTransaction::write(
                MMA8451Q_ADDR,
                vec![
                    0x23, 0x36, 0x37, 0x38, 0x39, 0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F, 0x40, 0x41,
                    0x42, 0x43, 0x44,
                ],
            ),
        ];
        let mut acc = Mma8451q::new(I2cMock::new(&expectations));

        let mut config = Mma8451qConfig::default();
        acc.fetch_configuration(&mut config).unwrap();
        acc.store_configuration(&config).unwrap();

        acc.release().done();
    }
}
