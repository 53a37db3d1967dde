//! MPU6050 accelerometer/gyroscope driver.
//!
//! Covers the register map revision 4.3 of the datasheet. Samples are plain
//! 16-bit two's complement values transmitted high byte first.

use bilge::prelude::*;
use embedded_hal::i2c::I2c;

use crate::endian::wire16;
use crate::registers::{mpu6050 as regs, Register, Registers};
use crate::{Error, MPU6050_ADDR, MPU6050_WHO_AM_I};

/// Clock source selection (PWR_MGMT_1 `CLKSEL` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ClockSource {
    /// Internal 8 MHz oscillator (the power-on default)
    Internal8Mhz = 0,
    /// PLL with X-axis gyroscope reference
    PllGyroX = 1,
    /// PLL with Y-axis gyroscope reference
    PllGyroY = 2,
    /// PLL with Z-axis gyroscope reference
    PllGyroZ = 3,
    /// PLL with external 32.768 kHz reference
    PllExternal32_768kHz = 4,
    /// PLL with external 19.2 MHz reference
    PllExternal19_2Mhz = 5,
    /// Clock stopped, timing generator held in reset
    Stop = 7,
}

/// Gyroscope full-scale range (GYRO_CONFIG `FS_SEL` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroFullScale {
    /// ±250 °/s
    Dps250 = 0b00,
    /// ±500 °/s
    Dps500 = 0b01,
    /// ±1000 °/s
    Dps1000 = 0b10,
    /// ±2000 °/s
    Dps2000 = 0b11,
}

/// Accelerometer full-scale range (ACCEL_CONFIG `AFS_SEL` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelFullScale {
    /// ±2 g
    G2 = 0b00,
    /// ±4 g
    G4 = 0b01,
    /// ±8 g
    G8 = 0b10,
    /// ±16 g
    G16 = 0b11,
}

/// Contents of the INT_STATUS register captured with a sample burst.
///
/// Reading the register clears the latched bits, so the snapshot taken
/// during [`Mpu6050::read_motion`] is the only record of them.
#[bitsize(8)]
#[derive(Clone, Copy, DebugBits, FromBits, PartialEq)]
pub struct InterruptStatus {
    /// Data-ready interrupt pending
    pub data_rdy_int: u1,
    reserved: u2,
    /// Auxiliary bus master interrupt pending
    pub i2c_mst_int: u1,
    /// FIFO overflow interrupt pending
    pub fifo_oflow_int: u1,
    reserved: u3,
}

#[cfg(feature = "defmt")]
impl defmt::Format for InterruptStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "InterruptStatus {{ data_rdy: {}, i2c_mst: {}, fifo_oflow: {} }}",
            self.data_rdy_int().value(),
            self.i2c_mst_int().value(),
            self.fifo_oflow_int().value(),
        );
    }
}

/// One combined sample of all sensors, captured in a single bus transaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    /// Interrupt status at capture time
    pub status: InterruptStatus,
    /// Accelerometer readings, X/Y/Z
    pub accel: (i16, i16, i16),
    /// Raw temperature reading; °C = raw / 340 + 36.53
    pub temperature: i16,
    /// Gyroscope readings, X/Y/Z
    pub gyro: (i16, i16, i16),
}

/// Snapshot of the MPU6050 configuration registers.
///
/// Field order matches ascending register addresses. The configuration space
/// consists of four contiguous runs (0x19..=0x1C, 0x23..=0x38, 0x63..=0x6C
/// and 0x72..=0x75); the self-test registers and the sensor output area are
/// not part of it. Read-only registers are populated by
/// [`Mpu6050::fetch_configuration`] but never transmitted by
/// [`Mpu6050::store_configuration`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mpu6050Config {
    /// SMPLRT_DIV (0x19)
    pub smplrt_div: u8,
    /// CONFIG (0x1A)
    pub config: u8,
    /// GYRO_CONFIG (0x1B)
    pub gyro_config: u8,
    /// ACCEL_CONFIG (0x1C)
    pub accel_config: u8,
    /// FIFO_EN (0x23)
    pub fifo_en: u8,
    /// I2C_MST_CTRL (0x24)
    pub i2c_mst_ctrl: u8,
    /// I2C_SLV0_ADDR (0x25)
    pub i2c_slv0_addr: u8,
    /// I2C_SLV0_REG (0x26)
    pub i2c_slv0_reg: u8,
    /// I2C_SLV0_CTRL (0x27)
    pub i2c_slv0_ctrl: u8,
    /// I2C_SLV1_ADDR (0x28)
    pub i2c_slv1_addr: u8,
    /// I2C_SLV1_REG (0x29)
    pub i2c_slv1_reg: u8,
    /// I2C_SLV1_CTRL (0x2A)
    pub i2c_slv1_ctrl: u8,
    /// I2C_SLV2_ADDR (0x2B)
    pub i2c_slv2_addr: u8,
    /// I2C_SLV2_REG (0x2C)
    pub i2c_slv2_reg: u8,
    /// I2C_SLV2_CTRL (0x2D)
    pub i2c_slv2_ctrl: u8,
    /// I2C_SLV3_ADDR (0x2E)
    pub i2c_slv3_addr: u8,
    /// I2C_SLV3_REG (0x2F)
    pub i2c_slv3_reg: u8,
    /// I2C_SLV3_CTRL (0x30)
    pub i2c_slv3_ctrl: u8,
    /// I2C_SLV4_ADDR (0x31)
    pub i2c_slv4_addr: u8,
    /// I2C_SLV4_REG (0x32)
    pub i2c_slv4_reg: u8,
    /// I2C_SLV4_DO (0x33)
    pub i2c_slv4_do: u8,
    /// I2C_SLV4_CTRL (0x34)
    pub i2c_slv4_ctrl: u8,
    /// I2C_SLV4_DI (0x35), read-only
    pub i2c_slv4_di: u8,
    /// I2C_MST_STATUS (0x36), read-only
    pub i2c_mst_status: u8,
    /// INT_PIN_CFG (0x37)
    pub int_pin_cfg: u8,
    /// INT_ENABLE (0x38)
    pub int_enable: u8,
    /// I2C_SLV0_DO (0x63)
    pub i2c_slv0_do: u8,
    /// I2C_SLV1_DO (0x64)
    pub i2c_slv1_do: u8,
    /// I2C_SLV2_DO (0x65)
    pub i2c_slv2_do: u8,
    /// I2C_SLV3_DO (0x66)
    pub i2c_slv3_do: u8,
    /// I2C_MST_DELAY_CTRL (0x67)
    pub i2c_mst_delay_ctrl: u8,
    /// SIGNAL_PATH_RESET (0x68)
    pub signal_path_reset: u8,
    /// MOT_DETECT_CTRL (0x69)
    pub mot_detect_ctrl: u8,
    /// USER_CTRL (0x6A)
    pub user_ctrl: u8,
    /// PWR_MGMT_1 (0x6B)
    pub pwr_mgmt_1: u8,
    /// PWR_MGMT_2 (0x6C)
    pub pwr_mgmt_2: u8,
    /// FIFO_COUNTH (0x72)
    pub fifo_counth: u8,
    /// FIFO_COUNTL (0x73)
    pub fifo_countl: u8,
    /// FIFO_R_W (0x74)
    pub fifo_r_w: u8,
    /// WHO_AM_I (0x75), read-only
    pub who_am_i: u8,
}

/// Target of a configuration helper.
///
/// [`Apply::Buffered`] edits a fetched aggregate in memory and causes no bus
/// traffic until the aggregate is stored; [`Apply::Direct`] updates the
/// device register immediately with a read-modify-write sequence.
pub enum Apply<'a> {
    /// Stage the change in a configuration aggregate
    Buffered(&'a mut Mpu6050Config),
    /// Write the change straight to the device
    Direct,
}

/// MPU6050 driver
pub struct Mpu6050<BUS> {
    bus: BUS,
}

impl<BUS> Mpu6050<BUS> {
    /// Create a new driver instance taking ownership of the bus.
    pub fn new(bus: BUS) -> Self {
        Mpu6050 { bus }
    }

    /// Low-level access to the device's register file
    pub fn regs(&mut self) -> Registers<'_, BUS, { MPU6050_ADDR }> {
        Registers::new(&mut self.bus)
    }

    /// Release the bus from the driver instance
    pub fn release(self) -> BUS {
        self.bus
    }
}

impl<BUS> Mpu6050<BUS>
where
    BUS: I2c,
{
    /// Reads the device identification code.
    ///
    /// Answers 0x68 regardless of the AD0 strap; the strap affects the bus
    /// address only.
    pub fn who_am_i(&mut self) -> Result<u8, BUS::Error> {
        Ok(self.regs().who_am_i().read()?.value())
    }

    /// Checks the identification code against the documented value.
    pub fn verify_identity(&mut self) -> Result<(), Error<BUS::Error>> {
        let id = self.who_am_i()?;
        if id != MPU6050_WHO_AM_I {
            return Err(Error::UnknownDevice(id));
        }
        Ok(())
    }

    /// Selects the device clock source.
    pub fn set_clock_source(
        &mut self,
        apply: Apply<'_>,
        source: ClockSource,
    ) -> Result<(), BUS::Error> {
        match apply {
            Apply::Buffered(config) => {
                config.pwr_mgmt_1 = (config.pwr_mgmt_1 & !0x07) | source as u8;
                Ok(())
            }
            Apply::Direct => self
                .regs()
                .pwr_mgmt_1()
                .modify(|_, w| w.clksel(source as u8)),
        }
    }

    /// Enables or disables sleep mode.
    ///
    /// The device powers up with this bit set and samples nothing until it
    /// is cleared.
    pub fn set_sleep(&mut self, apply: Apply<'_>, enabled: bool) -> Result<(), BUS::Error> {
        match apply {
            Apply::Buffered(config) => {
                config.pwr_mgmt_1 = (config.pwr_mgmt_1 & !0x40) | ((enabled as u8) << 6);
                Ok(())
            }
            Apply::Direct => self
                .regs()
                .pwr_mgmt_1()
                .modify(|_, w| w.sleep(enabled as u8)),
        }
    }

    /// Sets the sample rate divider.
    ///
    /// Sample rate = gyroscope output rate / (1 + divider). The register
    /// holds nothing else, so the direct form is a full write.
    pub fn set_sample_rate_divider(
        &mut self,
        apply: Apply<'_>,
        divider: u8,
    ) -> Result<(), BUS::Error> {
        match apply {
            Apply::Buffered(config) => {
                config.smplrt_div = divider;
                Ok(())
            }
            Apply::Direct => self.regs().smplrt_div().write(|w| w.value(divider)),
        }
    }

    /// Sets the gyroscope full-scale range.
    pub fn set_gyro_full_scale(
        &mut self,
        apply: Apply<'_>,
        scale: GyroFullScale,
    ) -> Result<(), BUS::Error> {
        match apply {
            Apply::Buffered(config) => {
                config.gyro_config = (config.gyro_config & !0x18) | ((scale as u8) << 3);
                Ok(())
            }
            Apply::Direct => self
                .regs()
                .gyro_config()
                .modify(|_, w| w.fs_sel(scale as u8)),
        }
    }

    /// Sets the accelerometer full-scale range.
    pub fn set_accel_full_scale(
        &mut self,
        apply: Apply<'_>,
        scale: AccelFullScale,
    ) -> Result<(), BUS::Error> {
        match apply {
            Apply::Buffered(config) => {
                config.accel_config = (config.accel_config & !0x18) | ((scale as u8) << 3);
                Ok(())
            }
            Apply::Direct => self
                .regs()
                .accel_config()
                .modify(|_, w| w.afs_sel(scale as u8)),
        }
    }

    /// Enables or disables the data-ready interrupt.
    pub fn set_data_ready_interrupt(
        &mut self,
        apply: Apply<'_>,
        enabled: bool,
    ) -> Result<(), BUS::Error> {
        match apply {
            Apply::Buffered(config) => {
                config.int_enable = (config.int_enable & !0x01) | enabled as u8;
                Ok(())
            }
            Apply::Direct => self
                .regs()
                .int_enable()
                .modify(|_, w| w.data_rdy_en(enabled as u8)),
        }
    }

    /// Reads one combined sample of all sensors.
    ///
    /// The interrupt status and all fourteen data bytes come back in a
    /// single burst, so the accelerometer, temperature and gyroscope
    /// readings belong to the same sampling instant. The burst read also
    /// clears the latched interrupt status.
    pub fn read_motion(&mut self) -> Result<MotionSample, BUS::Error> {
        let mut buffer = [0u8; 15];
        self.bus
            .write_read(MPU6050_ADDR, &[regs::INT_STATUS::ADDR], &mut buffer)?;

        Ok(MotionSample {
            status: InterruptStatus::from(buffer[0]),
            accel: (
                axis(buffer[1], buffer[2]),
                axis(buffer[3], buffer[4]),
                axis(buffer[5], buffer[6]),
            ),
            temperature: axis(buffer[7], buffer[8]),
            gyro: (
                axis(buffer[9], buffer[10]),
                axis(buffer[11], buffer[12]),
                axis(buffer[13], buffer[14]),
            ),
        })
    }

    /// Fetches the device configuration into `config`.
    ///
    /// Each of the four contiguous runs of the configuration space is read
    /// in one burst; the sensor output area in between is never touched. On
    /// failure the aggregate contents are undefined.
    pub fn fetch_configuration(&mut self, config: &mut Mpu6050Config) -> Result<(), BUS::Error> {
        let mut run_a = [0u8; 4];
        self.bus
            .write_read(MPU6050_ADDR, &[regs::SMPLRT_DIV::ADDR], &mut run_a)?;

        let mut run_b = [0u8; 22];
        self.bus
            .write_read(MPU6050_ADDR, &[regs::FIFO_EN::ADDR], &mut run_b)?;

        let mut run_c = [0u8; 10];
        self.bus
            .write_read(MPU6050_ADDR, &[regs::I2C_SLV0_DO::ADDR], &mut run_c)?;

        let mut run_d = [0u8; 4];
        self.bus
            .write_read(MPU6050_ADDR, &[regs::FIFO_COUNTH::ADDR], &mut run_d)?;

        let [smplrt_div, config_reg, gyro_config, accel_config] = run_a;
        let [fifo_en, i2c_mst_ctrl, i2c_slv0_addr, i2c_slv0_reg, i2c_slv0_ctrl, i2c_slv1_addr, i2c_slv1_reg, i2c_slv1_ctrl, i2c_slv2_addr, i2c_slv2_reg, i2c_slv2_ctrl, i2c_slv3_addr, i2c_slv3_reg, i2c_slv3_ctrl, i2c_slv4_addr, i2c_slv4_reg, i2c_slv4_do, i2c_slv4_ctrl, i2c_slv4_di, i2c_mst_status, int_pin_cfg, int_enable] =
            run_b;
        let [i2c_slv0_do, i2c_slv1_do, i2c_slv2_do, i2c_slv3_do, i2c_mst_delay_ctrl, signal_path_reset, mot_detect_ctrl, user_ctrl, pwr_mgmt_1, pwr_mgmt_2] =
            run_c;
        let [fifo_counth, fifo_countl, fifo_r_w, who_am_i] = run_d;

        *config = Mpu6050Config {
            smplrt_div,
            config: config_reg,
            gyro_config,
            accel_config,
            fifo_en,
            i2c_mst_ctrl,
            i2c_slv0_addr,
            i2c_slv0_reg,
            i2c_slv0_ctrl,
            i2c_slv1_addr,
            i2c_slv1_reg,
            i2c_slv1_ctrl,
            i2c_slv2_addr,
            i2c_slv2_reg,
            i2c_slv2_ctrl,
            i2c_slv3_addr,
            i2c_slv3_reg,
            i2c_slv3_ctrl,
            i2c_slv4_addr,
            i2c_slv4_reg,
            i2c_slv4_do,
            i2c_slv4_ctrl,
            i2c_slv4_di,
            i2c_mst_status,
            int_pin_cfg,
            int_enable,
            i2c_slv0_do,
            i2c_slv1_do,
            i2c_slv2_do,
            i2c_slv3_do,
            i2c_mst_delay_ctrl,
            signal_path_reset,
            mot_detect_ctrl,
            user_ctrl,
            pwr_mgmt_1,
            pwr_mgmt_2,
            fifo_counth,
            fifo_countl,
            fifo_r_w,
            who_am_i,
        };

        Ok(())
    }

    /// Stores every writable register of `config` back to the device.
    ///
    /// Each maximal run of writable registers goes out as one burst;
    /// read-only registers are never transmitted. The bus gives no
    /// atomicity across bursts, so a failure can leave the device
    /// partially updated; no rollback is attempted.
    pub fn store_configuration(&mut self, config: &Mpu6050Config) -> Result<(), BUS::Error> {
        self.bus.write(
            MPU6050_ADDR,
            &[
                regs::SMPLRT_DIV::ADDR,
                config.smplrt_div,
                config.config,
                config.gyro_config,
                config.accel_config,
            ],
        )?;
        self.bus.write(
            MPU6050_ADDR,
            &[
                regs::FIFO_EN::ADDR,
                config.fifo_en,
                config.i2c_mst_ctrl,
                config.i2c_slv0_addr,
                config.i2c_slv0_reg,
                config.i2c_slv0_ctrl,
                config.i2c_slv1_addr,
                config.i2c_slv1_reg,
                config.i2c_slv1_ctrl,
                config.i2c_slv2_addr,
                config.i2c_slv2_reg,
                config.i2c_slv2_ctrl,
                config.i2c_slv3_addr,
                config.i2c_slv3_reg,
                config.i2c_slv3_ctrl,
                config.i2c_slv4_addr,
                config.i2c_slv4_reg,
                config.i2c_slv4_do,
                config.i2c_slv4_ctrl,
            ],
        )?;
        // I2C_SLV4_DI and I2C_MST_STATUS are read-only
        self.bus.write(
            MPU6050_ADDR,
            &[
                regs::INT_PIN_CFG::ADDR,
                config.int_pin_cfg,
                config.int_enable,
            ],
        )?;
        self.bus.write(
            MPU6050_ADDR,
            &[
                regs::I2C_SLV0_DO::ADDR,
                config.i2c_slv0_do,
                config.i2c_slv1_do,
                config.i2c_slv2_do,
                config.i2c_slv3_do,
                config.i2c_mst_delay_ctrl,
                config.signal_path_reset,
                config.mot_detect_ctrl,
                config.user_ctrl,
                config.pwr_mgmt_1,
                config.pwr_mgmt_2,
            ],
        )?;
        // WHO_AM_I is read-only
        self.bus.write(
            MPU6050_ADDR,
            &[
                regs::FIFO_COUNTH::ADDR,
                config.fifo_counth,
                config.fifo_countl,
                config.fifo_r_w,
            ],
        )
    }
}

/// Converts a big-endian register byte pair into a signed sample.
fn axis(high: u8, low: u8) -> i16 {
    wire16(high, low) as i16
}

#[cfg(test)]
mod test {
    extern crate alloc;
    use alloc::vec;

    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::*;

    #[test]
    fn who_am_i_ignores_address_strap() {
        // The identification code stays 0x68 even though the bus address
        // carries the AD0 strap bit.
        let expectations = [I2cTransaction::write_read(
            MPU6050_ADDR,
            vec![0x75],
            vec![0x68],
        )];
        let mut imu = Mpu6050::new(I2cMock::new(&expectations));

        assert_eq!(imu.who_am_i().unwrap(), 0x68);
        imu.release().done();

        let expectations = [
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x75], vec![0x68]),
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x75], vec![0x98]),
        ];
        let mut imu = Mpu6050::new(I2cMock::new(&expectations));
        assert_eq!(imu.verify_identity(), Ok(()));
        assert_eq!(imu.verify_identity(), Err(Error::UnknownDevice(0x98)));

        imu.release().done();
    }

    #[test]
    fn motion_decode_preserves_sign_without_shifting() {
        let expectations = [I2cTransaction::write_read(
            MPU6050_ADDR,
            vec![0x3A],
            vec![
                0x01, // INT_STATUS: data ready
                0x12, 0x34, // accel X = 0x1234
                0xFF, 0xFC, // accel Y = -4
                0x40, 0x00, // accel Z = 0x4000
                0xFE, 0x0C, // temperature = -500
                0x00, 0x01, // gyro X = 1
                0x80, 0x00, // gyro Y = i16::MIN
                0x7F, 0xFF, // gyro Z = i16::MAX
            ],
        )];
        let mut imu = Mpu6050::new(I2cMock::new(&expectations));

        let sample = imu.read_motion().unwrap();
        assert_eq!(sample.status.data_rdy_int().value(), 1);
        assert_eq!(sample.status.fifo_oflow_int().value(), 0);
        assert_eq!(sample.accel, (0x1234, -4, 0x4000));
        assert_eq!(sample.temperature, -500);
        assert_eq!(sample.gyro, (1, i16::MIN, i16::MAX));

        imu.release().done();
    }

    #[test]
    fn fetch_populates_fields_in_address_order() {
        let run_b: vec::Vec<u8> = (0x20..0x36).collect();
        let run_c: vec::Vec<u8> = (0x50..0x5A).collect();
        let expectations = [
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x19], vec![0x07, 0x03, 0x18, 0x10]),
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x23], run_b),
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x63], run_c),
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x72], vec![0x01, 0x02, 0x03, 0x68]),
        ];
        let mut imu = Mpu6050::new(I2cMock::new(&expectations));

        let mut config = Mpu6050Config::default();
        imu.fetch_configuration(&mut config).unwrap();

        assert_eq!(config.smplrt_div, 0x07);
        assert_eq!(config.accel_config, 0x10);
        assert_eq!(config.fifo_en, 0x20);
        assert_eq!(config.i2c_slv4_ctrl, 0x31);
        assert_eq!(config.i2c_mst_status, 0x33);
        assert_eq!(config.int_enable, 0x35);
        assert_eq!(config.i2c_slv0_do, 0x50);
        assert_eq!(config.pwr_mgmt_2, 0x59);
        assert_eq!(config.fifo_counth, 0x01);
        assert_eq!(config.who_am_i, 0x68);

        imu.release().done();
    }

    #[test]
    fn fetch_store_round_trip_skips_read_only_registers() {
        let run_b: vec::Vec<u8> = (0x20..0x36).collect();
        let run_c: vec::Vec<u8> = (0x50..0x5A).collect();
        let expectations = [
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x19], vec![0x07, 0x03, 0x18, 0x10]),
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x23], run_b),
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x63], run_c),
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x72], vec![0x01, 0x02, 0x03, 0x68]),
            // Writable sub-runs only; I2C_SLV4_DI, I2C_MST_STATUS and
            // WHO_AM_I never appear in a write.
            I2cTransaction::write(MPU6050_ADDR, vec![0x19, 0x07, 0x03, 0x18, 0x10]),
            I2cTransaction::write(
                MPU6050_ADDR,
                vec![
                    0x23, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x2B,
                    0x2C, 0x2D, 0x2E, 0x2F, 0x30, 0x31,
                ],
            ),
            I2cTransaction::write(MPU6050_ADDR, vec![0x37, 0x34, 0x35]),
            I2cTransaction::write(
                MPU6050_ADDR,
                vec![
                    0x63, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59,
                ],
            ),
            I2cTransaction::write(MPU6050_ADDR, vec![0x72, 0x01, 0x02, 0x03]),
        ];
        let mut imu = Mpu6050::new(I2cMock::new(&expectations));

        let mut config = Mpu6050Config::default();
        imu.fetch_configuration(&mut config).unwrap();
        imu.store_configuration(&config).unwrap();

        imu.release().done();
    }

    #[test]
    fn buffered_updates_cause_no_bus_traffic() {
        let mut imu = Mpu6050::new(I2cMock::new(&[]));

        let mut config = Mpu6050Config {
            pwr_mgmt_1: 0b1010_1101,
            gyro_config: 0b1110_0111,
            int_enable: 0b0001_1000,
            ..Mpu6050Config::default()
        };

        imu.set_clock_source(Apply::Buffered(&mut config), ClockSource::PllGyroX)
            .unwrap();
        assert_eq!(config.pwr_mgmt_1, 0b1010_1001);

        imu.set_sleep(Apply::Buffered(&mut config), false).unwrap();
        assert_eq!(config.pwr_mgmt_1, 0b1000_1001);

        imu.set_gyro_full_scale(Apply::Buffered(&mut config), GyroFullScale::Dps1000)
            .unwrap();
        assert_eq!(config.gyro_config, 0b1111_0111);

        imu.set_data_ready_interrupt(Apply::Buffered(&mut config), true)
            .unwrap();
        assert_eq!(config.int_enable, 0b0001_1001);

        imu.set_sample_rate_divider(Apply::Buffered(&mut config), 9)
            .unwrap();
        assert_eq!(config.smplrt_div, 9);

        imu.release().done();
    }

    #[test]
    fn direct_updates_preserve_unrelated_bits() {
        let expectations = [
            // clock source: read-modify-write on PWR_MGMT_1
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x6B], vec![0b0100_1101]),
            I2cTransaction::write(MPU6050_ADDR, vec![0x6B, 0b0100_1011]),
            // accelerometer full scale: read-modify-write on ACCEL_CONFIG
            I2cTransaction::write_read(MPU6050_ADDR, vec![0x1C], vec![0b1110_0000]),
            I2cTransaction::write(MPU6050_ADDR, vec![0x1C, 0b1111_1000]),
        ];
        let mut imu = Mpu6050::new(I2cMock::new(&expectations));

        imu.set_clock_source(Apply::Direct, ClockSource::PllGyroZ)
            .unwrap();
        imu.set_accel_full_scale(Apply::Direct, AccelFullScale::G16)
            .unwrap();

        imu.release().done();
    }

    #[test]
    fn sample_rate_divider_is_a_full_register_write() {
        // SMPLRT_DIV has no other fields, so no read precedes the write.
        let expectations = [I2cTransaction::write(MPU6050_ADDR, vec![0x19, 0x07])];
        let mut imu = Mpu6050::new(I2cMock::new(&expectations));

        imu.set_sample_rate_divider(Apply::Direct, 0x07).unwrap();

        imu.release().done();
    }
}
