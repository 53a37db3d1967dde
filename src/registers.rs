//! Register maps and register access machinery.
//!
//! Each device's documented registers are described once, in the
//! [`impl_registers!`] tables at the bottom of this module. The macro turns
//! every table entry into a marker type carrying the physical address, a read
//! proxy with per-field getters, a write proxy with per-field setters (for
//! read-write registers only) and an accessor method on [`Registers`].
//!
//! Addresses that the authoritative register-map revision leaves reserved or
//! undocumented are omitted from the tables entirely, so no code path can
//! touch them. For the MPU6050 that revision is register map rev. 4.3;
//! registers that only appear in third-party references (fine-gain, user
//! offset, motion threshold, DMP and banked-memory registers) are excluded.

use core::marker::PhantomData;

use embedded_hal::i2c::I2c;
use paste::paste;

use crate::{DeviceAddr, MMA8451Q_ADDR, MPU6050_ADDR};

/// Provides access to the register file of one bus device.
///
/// The const parameter is the device's 7-bit bus address; accessor methods
/// for the individual registers are generated per device, so a `Registers`
/// handle can only name registers that exist on the addressed device.
#[derive(Debug, PartialEq, Eq)]
pub struct Registers<'b, BUS, const DEV: DeviceAddr> {
    bus: &'b mut BUS,
}

impl<'b, BUS, const DEV: DeviceAddr> Registers<'b, BUS, DEV> {
    /// Create a new instance of `Registers` borrowing the bus.
    pub fn new(bus: &'b mut BUS) -> Self {
        Registers { bus }
    }

    /// Direct access to the underlying bus
    pub fn bus(&mut self) -> &mut BUS {
        self.bus
    }

    /// The 7-bit bus address this handle talks to
    #[inline(always)]
    pub fn device_addr(&self) -> DeviceAddr {
        DEV
    }
}

/// Provides access to a single register
///
/// You can get an instance for a given register using one of the generated
/// methods on [`Registers`].
pub struct RegAccessor<'s, 'b, R, BUS, const DEV: DeviceAddr>(
    &'s mut Registers<'b, BUS, DEV>,
    PhantomData<R>,
);

impl<R, BUS, const DEV: DeviceAddr> RegAccessor<'_, '_, R, BUS, DEV>
where
    BUS: I2c,
{
    /// Read from the register
    pub fn read(&mut self) -> Result<R::Read, BUS::Error>
    where
        R: Register + Readable,
    {
        let mut r = R::read();
        let mut buffer = [0u8; 1];
        self.0.bus.write_read(DEV, &[R::ADDR], &mut buffer)?;
        *R::bits(&mut r) = buffer[0];
        Ok(r)
    }

    /// Write to the register
    ///
    /// The write proxy starts out zeroed, so any field the closure does not
    /// set is written as zero. Use [`modify`](Self::modify) to change a
    /// subset of a register's bits.
    pub fn write<F>(&mut self, f: F) -> Result<(), BUS::Error>
    where
        R: Register + Writable,
        F: FnOnce(&mut R::Write) -> &mut R::Write,
    {
        let mut w = R::write();
        f(&mut w);

        let value = *R::bits(&mut w);
        self.0.bus.write(DEV, &[R::ADDR, value])
    }

    /// Modify the register
    ///
    /// Reads the current value, hands a copy to the closure and writes the
    /// result back. Bits outside the fields the closure touches are preserved
    /// bit-for-bit. The exclusive borrow on the bus keeps another transaction
    /// from interleaving between the read and the write half.
    pub fn modify<F>(&mut self, f: F) -> Result<(), BUS::Error>
    where
        R: Register + Readable + Writable,
        F: for<'w> FnOnce(&mut R::Read, &'w mut R::Write) -> &'w mut R::Write,
    {
        let mut r = self.read()?;
        let mut w = R::write();

        *<R as Writable>::bits(&mut w) = *<R as Readable>::bits(&mut r);

        f(&mut r, &mut w);

        let value = *<R as Writable>::bits(&mut w);
        self.0.bus.write(DEV, &[R::ADDR, value])
    }
}

/// Implemented for all registers
pub trait Register {
    /// The physical register address on the device
    const ADDR: u8;
}

/// Marker trait for registers that can be read from
pub trait Readable {
    /// The type that is used to read from the register
    type Read;

    /// Return the read type for this register
    fn read() -> Self::Read;

    /// Return the read type's register byte
    fn bits(r: &mut Self::Read) -> &mut u8;
}

/// Marker trait for registers that can be written to
///
/// Registers the device documents as read-only do not implement this, which
/// rules out accidental writes to them at compile time.
pub trait Writable {
    /// The type that is used to write to the register
    type Write;

    /// Return the write type for this register
    fn write() -> Self::Write;

    /// Return the write type's register byte
    fn bits(w: &mut Self::Write) -> &mut u8;
}

/// Generates register implementations
macro_rules! impl_registers {
    (
        $device:ident, $devmod:ident,
        $(
            $addr:expr, $rw:tt, $name:ident($name_lower:ident) {
            #[$doc:meta]
            $(
                $field:ident, $first_bit:expr, $last_bit:expr;
                #[$field_doc:meta]
            )*
            }
        )*
    ) => {
        paste! {
            pub mod $devmod {
                use super::*;

                $(
                    #[$doc]
                    #[allow(non_camel_case_types)]
                    pub struct $name;

                    impl Register for $name {
                        const ADDR: u8 = $addr;
                    }

                    #[$doc]
                    pub mod $name_lower {
                        /// Used to read from the register
                        pub struct R(pub(crate) u8);

                        impl R {
                            /// Raw register value
                            pub fn bits(&self) -> u8 {
                                self.0
                            }

                            $(
                                #[$field_doc]
                                pub fn $field(&self) -> u8 {
                                    const MASK: u8 =
                                        ((1u16 << ($last_bit - $first_bit + 1)) - 1) as u8;
                                    (self.0 >> $first_bit) & MASK
                                }
                            )*
                        }

                        impl core::fmt::Debug for R {
                            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                                write!(f, "0x{:02x}", self.0)
                            }
                        }

                        /// Used to write to the register
                        pub struct W(pub(crate) u8);

                        impl W {
                            $(
                                #[$field_doc]
                                pub fn $field(&mut self, value: u8) -> &mut Self {
                                    const MASK: u8 =
                                        (((1u16 << ($last_bit - $first_bit + 1)) - 1) as u8)
                                            << $first_bit;
                                    self.0 = (self.0 & !MASK) | ((value << $first_bit) & MASK);
                                    self
                                }
                            )*
                        }
                    }

                    impl_rw!($rw, $name, $name_lower);
                )*
            }

            impl<'b, BUS> Registers<'b, BUS, { $device }> {
                $(
                    #[$doc]
                    pub fn $name_lower(
                        &mut self,
                    ) -> RegAccessor<'_, 'b, $devmod::$name, BUS, { $device }> {
                        RegAccessor(self, PhantomData)
                    }
                )*
            }
        }
    };
}

/// Helper macro, used internally by `impl_registers!`
macro_rules! impl_rw {
    (RO, $name:ident, $name_lower:ident) => {
        impl_rw!(@R, $name, $name_lower);
    };
    (RW, $name:ident, $name_lower:ident) => {
        impl_rw!(@R, $name, $name_lower);
        impl_rw!(@W, $name, $name_lower);
    };

    (@R, $name:ident, $name_lower:ident) => {
        impl Readable for $name {
            type Read = $name_lower::R;

            fn read() -> Self::Read {
                $name_lower::R(0)
            }

            fn bits(r: &mut Self::Read) -> &mut u8 {
                &mut r.0
            }
        }
    };
    (@W, $name:ident, $name_lower:ident) => {
        impl Writable for $name {
            type Write = $name_lower::W;

            fn write() -> Self::Write {
                $name_lower::W(0)
            }

            fn bits(w: &mut Self::Write) -> &mut u8 {
                &mut w.0
            }
        }
    };
}

impl_registers! {
    MMA8451Q_ADDR, mma8451q,
    0x00, RO, STATUS(status) { /// Real-time data-ready status (no-FIFO mode)
        xdr, 0, 0;    /// X-axis new data available
        ydr, 1, 1;    /// Y-axis new data available
        zdr, 2, 2;    /// Z-axis new data available
        zyxdr, 3, 3;  /// New data available on any axis
        xow, 4, 4;    /// X-axis data overwritten before read
        yow, 5, 5;    /// Y-axis data overwritten before read
        zow, 6, 6;    /// Z-axis data overwritten before read
        zyxow, 7, 7;  /// Data overwrite on any axis
    }
    0x01, RO, OUT_X_MSB(out_x_msb) { /// X-axis sample, bits [13:6]
        value, 0, 7;  /// Upper byte of the left-justified sample
    }
    0x02, RO, OUT_X_LSB(out_x_lsb) { /// X-axis sample, bits [5:0] left-justified
        value, 0, 7;  /// Lower byte of the left-justified sample
    }
    0x03, RO, OUT_Y_MSB(out_y_msb) { /// Y-axis sample, bits [13:6]
        value, 0, 7;  /// Upper byte of the left-justified sample
    }
    0x04, RO, OUT_Y_LSB(out_y_lsb) { /// Y-axis sample, bits [5:0] left-justified
        value, 0, 7;  /// Lower byte of the left-justified sample
    }
    0x05, RO, OUT_Z_MSB(out_z_msb) { /// Z-axis sample, bits [13:6]
        value, 0, 7;  /// Upper byte of the left-justified sample
    }
    0x06, RO, OUT_Z_LSB(out_z_lsb) { /// Z-axis sample, bits [5:0] left-justified
        value, 0, 7;  /// Lower byte of the left-justified sample
    }
    // 0x07..0x08 reserved
    0x09, RW, F_SETUP(f_setup) { /// FIFO setup, reset 0x00
        f_wmrk, 0, 5; /// FIFO event sample count watermark
        f_mode, 6, 7; /// FIFO buffer overflow mode
    }
    0x0A, RW, TRIG_CFG(trig_cfg) { /// FIFO trigger configuration, reset 0x00
        trig_ff_mt, 2, 2;  /// Freefall/motion trigger
        trig_pulse, 3, 3;  /// Pulse trigger
        trig_lndprt, 4, 4; /// Landscape/portrait trigger
        trig_trans, 5, 5;  /// Transient trigger
    }
    0x0B, RO, SYSMOD(sysmod) { /// Current system mode
        sysmod, 0, 1; /// 00 standby, 01 wake, 10 sleep
        fgt, 2, 6;    /// Number of ODR periods since FIFO gate error
        fgerr, 7, 7;  /// FIFO gate error
    }
    0x0C, RO, INT_SOURCE(int_source) { /// Pending interrupt sources
        src_drdy, 0, 0;   /// Data-ready interrupt pending
        src_ff_mt, 2, 2;  /// Freefall/motion interrupt pending
        src_pulse, 3, 3;  /// Pulse interrupt pending
        src_lndprt, 4, 4; /// Orientation interrupt pending
        src_trans, 5, 5;  /// Transient interrupt pending
        src_aslp, 7, 7;   /// Auto-sleep/wake interrupt pending
    }
    0x0D, RO, WHO_AM_I(who_am_i) { /// Device identification, reset 0x1A
        value, 0, 7;  /// Fixed identification code
    }
    0x0E, RW, XYZ_DATA_CFG(xyz_data_cfg) { /// Sensitivity and output filtering, reset 0x00
        fs, 0, 1;      /// Full-scale range: 00 ±2g, 01 ±4g, 10 ±8g
        hpf_out, 4, 4; /// Route output data through the high-pass filter
    }
    0x0F, RW, HP_FILTER_CUTOFF(hp_filter_cutoff) { /// High-pass filter cutoff, reset 0x00
        sel, 0, 1;           /// Cutoff frequency selection
        pulse_lpf_en, 4, 4;  /// Low-pass filter for pulse processing
        pulse_hpf_byp, 5, 5; /// Bypass high-pass filter for pulse processing
    }
    0x10, RO, PL_STATUS(pl_status) { /// Landscape/portrait status
        bafro, 0, 0; /// Back or front orientation
        lapo, 1, 2;  /// Landscape/portrait orientation
        lo, 6, 6;    /// Z-tilt angle lockout
        newlp, 7, 7; /// Orientation status changed since last read
    }
    0x11, RW, PL_CFG(pl_cfg) { /// Landscape/portrait configuration, reset 0x80
        pl_en, 6, 6;  /// Orientation detection enable
        dbcntm, 7, 7; /// Debounce counter mode
    }
    0x12, RW, PL_COUNT(pl_count) { /// Landscape/portrait debounce counter, reset 0x00
        value, 0, 7;  /// Debounce count
    }
    0x13, RW, PL_BF_ZCOMP(pl_bf_zcomp) { /// Back/front and Z compensation, reset 0x44
        zlock, 0, 2; /// Z-lock angle threshold
        bkfr, 6, 7;  /// Back/front trip angle threshold
    }
    0x14, RW, PL_THS_REG(pl_ths_reg) { /// Portrait/landscape threshold and hysteresis, reset 0x84
        hys, 0, 2;    /// Hysteresis added to the threshold angle
        pl_ths, 3, 7; /// Portrait/landscape trip threshold angle
    }
    0x15, RW, FF_MT_CFG(ff_mt_cfg) { /// Freefall/motion configuration, reset 0x00
        xefe, 3, 3; /// X-axis event flag enable
        yefe, 4, 4; /// Y-axis event flag enable
        zefe, 5, 5; /// Z-axis event flag enable
        oae, 6, 6;  /// Motion detect (1) or freefall detect (0)
        ele, 7, 7;  /// Event latch enable
    }
    0x16, RO, FF_MT_SRC(ff_mt_src) { /// Freefall/motion event source
        xhp, 0, 0; /// X-axis motion polarity
        xhe, 1, 1; /// X-axis motion detected
        yhp, 2, 2; /// Y-axis motion polarity
        yhe, 3, 3; /// Y-axis motion detected
        zhp, 4, 4; /// Z-axis motion polarity
        zhe, 5, 5; /// Z-axis motion detected
        ea, 7, 7;  /// Event active
    }
    0x17, RW, FF_MT_THS(ff_mt_ths) { /// Freefall/motion threshold, reset 0x00
        ths, 0, 6;    /// Event threshold
        dbcntm, 7, 7; /// Debounce counter mode
    }
    0x18, RW, FF_MT_COUNT(ff_mt_count) { /// Freefall/motion debounce counter, reset 0x00
        value, 0, 7;  /// Debounce count
    }
    // 0x19..0x1C reserved
    0x1D, RW, TRANSIENT_CFG(transient_cfg) { /// Transient event configuration, reset 0x00
        hpf_byp, 0, 0; /// Bypass high-pass filter for transient detection
        xtefe, 1, 1;   /// X-axis transient flag enable
        ytefe, 2, 2;   /// Y-axis transient flag enable
        ztefe, 3, 3;   /// Z-axis transient flag enable
        ele, 4, 4;     /// Event latch enable
    }
    0x1E, RO, TRANSIENT_SRC(transient_src) { /// Transient event source
        x_trans_pol, 0, 0; /// X-axis transient polarity
        xtranse, 1, 1;     /// X-axis transient detected
        y_trans_pol, 2, 2; /// Y-axis transient polarity
        ytranse, 3, 3;     /// Y-axis transient detected
        z_trans_pol, 4, 4; /// Z-axis transient polarity
        ztranse, 5, 5;     /// Z-axis transient detected
        ea, 6, 6;          /// Event active
    }
    0x1F, RW, TRANSIENT_THS(transient_ths) { /// Transient threshold, reset 0x00
        ths, 0, 6;    /// Transient event threshold
        dbcntm, 7, 7; /// Debounce counter mode
    }
    0x20, RW, TRANSIENT_COUNT(transient_count) { /// Transient debounce counter, reset 0x00
        value, 0, 7;  /// Debounce count
    }
    0x21, RW, PULSE_CFG(pulse_cfg) { /// Pulse configuration, reset 0x00
        xspefe, 0, 0; /// X-axis single pulse enable
        xdpefe, 1, 1; /// X-axis double pulse enable
        yspefe, 2, 2; /// Y-axis single pulse enable
        ydpefe, 3, 3; /// Y-axis double pulse enable
        zspefe, 4, 4; /// Z-axis single pulse enable
        zdpefe, 5, 5; /// Z-axis double pulse enable
        ele, 6, 6;    /// Event latch enable
        dpa, 7, 7;    /// Double pulse abort
    }
    0x22, RO, PULSE_SRC(pulse_src) { /// Pulse event source
        pol_x, 0, 0; /// X-axis pulse polarity
        pol_y, 1, 1; /// Y-axis pulse polarity
        pol_z, 2, 2; /// Z-axis pulse polarity
        dpe, 3, 3;   /// Double pulse event
        axz, 4, 4;   /// Z-axis event triggered
        axy, 5, 5;   /// Y-axis event triggered
        axx, 6, 6;   /// X-axis event triggered
        ea, 7, 7;    /// Event active
    }
    0x23, RW, PULSE_THSX(pulse_thsx) { /// X-axis pulse threshold, reset 0x00
        ths, 0, 6;  /// Threshold
    }
    0x24, RW, PULSE_THSY(pulse_thsy) { /// Y-axis pulse threshold, reset 0x00
        ths, 0, 6;  /// Threshold
    }
    0x25, RW, PULSE_THSZ(pulse_thsz) { /// Z-axis pulse threshold, reset 0x00
        ths, 0, 6;  /// Threshold
    }
    0x26, RW, PULSE_TMLT(pulse_tmlt) { /// Pulse time limit, reset 0x00
        value, 0, 7;  /// First pulse time window
    }
    0x27, RW, PULSE_LTCY(pulse_ltcy) { /// Pulse latency, reset 0x00
        value, 0, 7;  /// Dead time after first pulse
    }
    0x28, RW, PULSE_WIND(pulse_wind) { /// Second pulse window, reset 0x00
        value, 0, 7;  /// Time window for the second pulse
    }
    0x29, RW, ASLP_COUNT(aslp_count) { /// Auto-sleep inactivity counter, reset 0x00
        value, 0, 7;  /// Minimum inactivity periods before sleep
    }
    0x2A, RW, CTRL_REG1(ctrl_reg1) { /// System control 1, reset 0x00
        active, 0, 0;    /// Standby (0) or active (1) mode
        f_read, 1, 1;    /// Fast-read mode, 8-bit samples
        lnoise, 2, 2;    /// Reduced noise, reduced full-scale mode
        dr, 3, 5;        /// Output data rate, 000 = 800 Hz down to 111 = 1.56 Hz
        aslp_rate, 6, 7; /// Auto-wake sample frequency
    }
    0x2B, RW, CTRL_REG2(ctrl_reg2) { /// System control 2, reset 0x00
        mods, 0, 1;  /// Active-mode oversampling mode
        slpe, 2, 2;  /// Auto-sleep enable
        smods, 3, 4; /// Sleep-mode oversampling mode
        rst, 6, 6;   /// Software reset
        st, 7, 7;    /// Self-test enable
    }
    0x2C, RW, CTRL_REG3(ctrl_reg3) { /// Interrupt control, reset 0x00
        pp_od, 0, 0;       /// Push-pull (0) or open-drain (1) interrupt pads
        ipol, 1, 1;        /// Interrupt polarity, active low (0) or active high (1)
        wake_ff_mt, 3, 3;  /// Freefall/motion wakes from sleep
        wake_pulse, 4, 4;  /// Pulse wakes from sleep
        wake_lndprt, 5, 5; /// Orientation wakes from sleep
        wake_trans, 6, 6;  /// Transient wakes from sleep
        fifo_gate, 7, 7;   /// FIFO gate on sleep/wake transitions
    }
    0x2D, RW, CTRL_REG4(ctrl_reg4) { /// Interrupt enable, reset 0x00
        int_en_drdy, 0, 0;   /// Data-ready interrupt enable
        int_en_ff_mt, 2, 2;  /// Freefall/motion interrupt enable
        int_en_pulse, 3, 3;  /// Pulse interrupt enable
        int_en_lndprt, 4, 4; /// Orientation interrupt enable
        int_en_trans, 5, 5;  /// Transient interrupt enable
        int_en_aslp, 7, 7;   /// Auto-sleep/wake interrupt enable
    }
    0x2E, RW, CTRL_REG5(ctrl_reg5) { /// Interrupt pin routing, reset 0x00: all sources on INT1
        int_cfg_drdy, 0, 0;   /// Data-ready interrupt pin
        int_cfg_ff_mt, 2, 2;  /// Freefall/motion interrupt pin
        int_cfg_pulse, 3, 3;  /// Pulse interrupt pin
        int_cfg_lndprt, 4, 4; /// Orientation interrupt pin
        int_cfg_trans, 5, 5;  /// Transient interrupt pin
        int_cfg_aslp, 7, 7;   /// Auto-sleep/wake interrupt pin
    }
    0x2F, RW, OFF_X(off_x) { /// X-axis user offset correction, reset 0x00
        value, 0, 7;  /// Signed offset, 2 mg/LSB
    }
    0x30, RW, OFF_Y(off_y) { /// Y-axis user offset correction, reset 0x00
        value, 0, 7;  /// Signed offset, 2 mg/LSB
    }
    0x31, RW, OFF_Z(off_z) { /// Z-axis user offset correction, reset 0x00
        value, 0, 7;  /// Signed offset, 2 mg/LSB
    }
}

impl_registers! {
    MPU6050_ADDR, mpu6050,
    0x0D, RW, SELF_TEST_X(self_test_x) { /// X-axis self test, reset 0x00
        xg_test, 0, 4; /// Gyroscope self-test value
        xa_test, 5, 7; /// Accelerometer self-test value, bits [4:2]
    }
    0x0E, RW, SELF_TEST_Y(self_test_y) { /// Y-axis self test, reset 0x00
        yg_test, 0, 4; /// Gyroscope self-test value
        ya_test, 5, 7; /// Accelerometer self-test value, bits [4:2]
    }
    0x0F, RW, SELF_TEST_Z(self_test_z) { /// Z-axis self test, reset 0x00
        zg_test, 0, 4; /// Gyroscope self-test value
        za_test, 5, 7; /// Accelerometer self-test value, bits [4:2]
    }
    0x10, RW, SELF_TEST_A(self_test_a) { /// Accelerometer self test, low bits, reset 0x00
        za_test, 0, 1; /// Z accelerometer self-test value, bits [1:0]
        ya_test, 2, 3; /// Y accelerometer self-test value, bits [1:0]
        xa_test, 4, 5; /// X accelerometer self-test value, bits [1:0]
    }
    0x19, RW, SMPLRT_DIV(smplrt_div) { /// Sample rate divider, reset 0x00
        value, 0, 7;  /// Sample rate = gyro output rate / (1 + divider)
    }
    0x1A, RW, CONFIG(config) { /// FSYNC and low-pass filter configuration, reset 0x00
        dlpf_cfg, 0, 2;     /// Digital low-pass filter bandwidth
        ext_sync_set, 3, 5; /// FSYNC pin sample location
    }
    0x1B, RW, GYRO_CONFIG(gyro_config) { /// Gyroscope configuration, reset 0x00
        fs_sel, 3, 4; /// Full-scale range: 00 ±250 to 11 ±2000 °/s
        zg_st, 5, 5;  /// Z-axis gyroscope self test
        yg_st, 6, 6;  /// Y-axis gyroscope self test
        xg_st, 7, 7;  /// X-axis gyroscope self test
    }
    0x1C, RW, ACCEL_CONFIG(accel_config) { /// Accelerometer configuration, reset 0x00
        afs_sel, 3, 4; /// Full-scale range: 00 ±2g to 11 ±16g
        za_st, 5, 5;   /// Z-axis accelerometer self test
        ya_st, 6, 6;   /// Y-axis accelerometer self test
        xa_st, 7, 7;   /// X-axis accelerometer self test
    }
    0x23, RW, FIFO_EN(fifo_en) { /// FIFO source enable, reset 0x00
        slv0_fifo_en, 0, 0;  /// External sensor slave 0 into FIFO
        slv1_fifo_en, 1, 1;  /// External sensor slave 1 into FIFO
        slv2_fifo_en, 2, 2;  /// External sensor slave 2 into FIFO
        accel_fifo_en, 3, 3; /// Accelerometer samples into FIFO
        zg_fifo_en, 4, 4;    /// Z gyroscope samples into FIFO
        yg_fifo_en, 5, 5;    /// Y gyroscope samples into FIFO
        xg_fifo_en, 6, 6;    /// X gyroscope samples into FIFO
        temp_fifo_en, 7, 7;  /// Temperature samples into FIFO
    }
    0x24, RW, I2C_MST_CTRL(i2c_mst_ctrl) { /// Auxiliary bus master control, reset 0x00
        i2c_mst_clk, 0, 3;   /// Auxiliary bus clock divider
        i2c_mst_p_nsr, 4, 4; /// Stop (1) or restart (0) between slave reads
        slv_3_fifo_en, 5, 5; /// External sensor slave 3 into FIFO
        wait_for_es, 6, 6;   /// Delay data ready until external data arrives
        mult_mst_en, 7, 7;   /// Multi-master capability enable
    }
    0x25, RW, I2C_SLV0_ADDR(i2c_slv0_addr) { /// Slave 0 address, reset 0x00
        i2c_slv0_addr, 0, 6; /// 7-bit slave address
        i2c_slv0_rw, 7, 7;   /// Read (1) or write (0) transfer
    }
    0x26, RW, I2C_SLV0_REG(i2c_slv0_reg) { /// Slave 0 start register, reset 0x00
        value, 0, 7;  /// Register address the transfer begins at
    }
    0x27, RW, I2C_SLV0_CTRL(i2c_slv0_ctrl) { /// Slave 0 transfer control, reset 0x00
        i2c_slv0_len, 0, 3;     /// Number of bytes to transfer
        i2c_slv0_grp, 4, 4;     /// Word pairing of transferred bytes
        i2c_slv0_reg_dis, 5, 5; /// Skip the register address phase
        i2c_slv0_byte_sw, 6, 6; /// Swap bytes of transferred words
        i2c_slv0_en, 7, 7;      /// Slave 0 transfer enable
    }
    0x28, RW, I2C_SLV1_ADDR(i2c_slv1_addr) { /// Slave 1 address, layout as I2C_SLV0_ADDR
        value, 0, 7;  /// Raw register value
    }
    0x29, RW, I2C_SLV1_REG(i2c_slv1_reg) { /// Slave 1 start register, reset 0x00
        value, 0, 7;  /// Register address the transfer begins at
    }
    0x2A, RW, I2C_SLV1_CTRL(i2c_slv1_ctrl) { /// Slave 1 transfer control, layout as I2C_SLV0_CTRL
        value, 0, 7;  /// Raw register value
    }
    0x2B, RW, I2C_SLV2_ADDR(i2c_slv2_addr) { /// Slave 2 address, layout as I2C_SLV0_ADDR
        value, 0, 7;  /// Raw register value
    }
    0x2C, RW, I2C_SLV2_REG(i2c_slv2_reg) { /// Slave 2 start register, reset 0x00
        value, 0, 7;  /// Register address the transfer begins at
    }
    0x2D, RW, I2C_SLV2_CTRL(i2c_slv2_ctrl) { /// Slave 2 transfer control, layout as I2C_SLV0_CTRL
        value, 0, 7;  /// Raw register value
    }
    0x2E, RW, I2C_SLV3_ADDR(i2c_slv3_addr) { /// Slave 3 address, layout as I2C_SLV0_ADDR
        value, 0, 7;  /// Raw register value
    }
    0x2F, RW, I2C_SLV3_REG(i2c_slv3_reg) { /// Slave 3 start register, reset 0x00
        value, 0, 7;  /// Register address the transfer begins at
    }
    0x30, RW, I2C_SLV3_CTRL(i2c_slv3_ctrl) { /// Slave 3 transfer control, layout as I2C_SLV0_CTRL
        value, 0, 7;  /// Raw register value
    }
    0x31, RW, I2C_SLV4_ADDR(i2c_slv4_addr) { /// Slave 4 address, reset 0x00
        i2c_slv4_addr, 0, 6; /// 7-bit slave address
        i2c_slv4_rw, 7, 7;   /// Read (1) or write (0) transfer
    }
    0x32, RW, I2C_SLV4_REG(i2c_slv4_reg) { /// Slave 4 register, reset 0x00
        value, 0, 7;  /// Register address accessed on the slave
    }
    0x33, RW, I2C_SLV4_DO(i2c_slv4_do) { /// Slave 4 data out, reset 0x00
        value, 0, 7;  /// Byte written to the slave
    }
    0x34, RW, I2C_SLV4_CTRL(i2c_slv4_ctrl) { /// Slave 4 transfer control, reset 0x00
        i2c_mst_dly, 0, 4;      /// Slave access reduction rate
        i2c_slv4_reg_dis, 5, 5; /// Skip the register address phase
        slv4_done_int_en, 6, 6; /// Interrupt on transfer completion
        i2c_slv4_en, 7, 7;      /// Slave 4 transfer enable
    }
    0x35, RO, I2C_SLV4_DI(i2c_slv4_di) { /// Slave 4 data in
        value, 0, 7;  /// Byte read from the slave
    }
    0x36, RO, I2C_MST_STATUS(i2c_mst_status) { /// Auxiliary bus master status
        i2c_slv0_nack, 0, 0; /// Slave 0 NACK received
        i2c_slv1_nack, 1, 1; /// Slave 1 NACK received
        i2c_slv2_nack, 2, 2; /// Slave 2 NACK received
        i2c_slv3_nack, 3, 3; /// Slave 3 NACK received
        i2c_slv4_nack, 4, 4; /// Slave 4 NACK received
        i2c_lost_arb, 5, 5;  /// Auxiliary bus arbitration lost
        i2c_slv4_done, 6, 6; /// Slave 4 transfer completed
        pass_through, 7, 7;  /// FSYNC interrupt status
    }
    0x37, RW, INT_PIN_CFG(int_pin_cfg) { /// Interrupt pin configuration, reset 0x00
        clkout_en, 0, 0;       /// Reference clock output enable
        i2c_bypass_en, 1, 1;   /// Host access to the auxiliary bus
        fsync_int_en, 2, 2;    /// FSYNC pin as interrupt input
        fsync_int_level, 3, 3; /// FSYNC interrupt active low
        int_rd_clear, 4, 4;    /// Clear interrupt status on any read
        latch_int_en, 5, 5;    /// Hold interrupt pin until status is cleared
        int_open, 6, 6;        /// Push-pull (0) or open-drain (1) pin drive
        int_level, 7, 7;       /// Interrupt active low (1) or active high (0)
    }
    0x38, RW, INT_ENABLE(int_enable) { /// Interrupt enable, reset 0x00
        data_rdy_en, 0, 0;    /// Data-ready interrupt enable
        i2c_mst_int_en, 3, 3; /// Auxiliary bus master interrupt enable
        fifo_oflow_en, 4, 4;  /// FIFO overflow interrupt enable
    }
    0x3A, RO, INT_STATUS(int_status) { /// Pending interrupt sources, cleared on read
        data_rdy_int, 0, 0;   /// Data-ready interrupt pending
        i2c_mst_int, 3, 3;    /// Auxiliary bus master interrupt pending
        fifo_oflow_int, 4, 4; /// FIFO overflow interrupt pending
    }
    0x3B, RO, ACCEL_XOUT_H(accel_xout_h) { /// Accelerometer X sample, high byte
        value, 0, 7;  /// Sample bits [15:8]
    }
    0x3C, RO, ACCEL_XOUT_L(accel_xout_l) { /// Accelerometer X sample, low byte
        value, 0, 7;  /// Sample bits [7:0]
    }
    0x3D, RO, ACCEL_YOUT_H(accel_yout_h) { /// Accelerometer Y sample, high byte
        value, 0, 7;  /// Sample bits [15:8]
    }
    0x3E, RO, ACCEL_YOUT_L(accel_yout_l) { /// Accelerometer Y sample, low byte
        value, 0, 7;  /// Sample bits [7:0]
    }
    0x3F, RO, ACCEL_ZOUT_H(accel_zout_h) { /// Accelerometer Z sample, high byte
        value, 0, 7;  /// Sample bits [15:8]
    }
    0x40, RO, ACCEL_ZOUT_L(accel_zout_l) { /// Accelerometer Z sample, low byte
        value, 0, 7;  /// Sample bits [7:0]
    }
    0x41, RO, TEMP_OUT_H(temp_out_h) { /// Temperature sample, high byte
        value, 0, 7;  /// Sample bits [15:8]
    }
    0x42, RO, TEMP_OUT_L(temp_out_l) { /// Temperature sample, low byte
        value, 0, 7;  /// Sample bits [7:0]
    }
    0x43, RO, GYRO_XOUT_H(gyro_xout_h) { /// Gyroscope X sample, high byte
        value, 0, 7;  /// Sample bits [15:8]
    }
    0x44, RO, GYRO_XOUT_L(gyro_xout_l) { /// Gyroscope X sample, low byte
        value, 0, 7;  /// Sample bits [7:0]
    }
    0x45, RO, GYRO_YOUT_H(gyro_yout_h) { /// Gyroscope Y sample, high byte
        value, 0, 7;  /// Sample bits [15:8]
    }
    0x46, RO, GYRO_YOUT_L(gyro_yout_l) { /// Gyroscope Y sample, low byte
        value, 0, 7;  /// Sample bits [7:0]
    }
    0x47, RO, GYRO_ZOUT_H(gyro_zout_h) { /// Gyroscope Z sample, high byte
        value, 0, 7;  /// Sample bits [15:8]
    }
    0x48, RO, GYRO_ZOUT_L(gyro_zout_l) { /// Gyroscope Z sample, low byte
        value, 0, 7;  /// Sample bits [7:0]
    }
    0x49, RO, EXT_SENS_DATA_00(ext_sens_data_00) { /// External sensor data byte 0
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x4A, RO, EXT_SENS_DATA_01(ext_sens_data_01) { /// External sensor data byte 1
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x4B, RO, EXT_SENS_DATA_02(ext_sens_data_02) { /// External sensor data byte 2
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x4C, RO, EXT_SENS_DATA_03(ext_sens_data_03) { /// External sensor data byte 3
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x4D, RO, EXT_SENS_DATA_04(ext_sens_data_04) { /// External sensor data byte 4
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x4E, RO, EXT_SENS_DATA_05(ext_sens_data_05) { /// External sensor data byte 5
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x4F, RO, EXT_SENS_DATA_06(ext_sens_data_06) { /// External sensor data byte 6
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x50, RO, EXT_SENS_DATA_07(ext_sens_data_07) { /// External sensor data byte 7
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x51, RO, EXT_SENS_DATA_08(ext_sens_data_08) { /// External sensor data byte 8
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x52, RO, EXT_SENS_DATA_09(ext_sens_data_09) { /// External sensor data byte 9
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x53, RO, EXT_SENS_DATA_10(ext_sens_data_10) { /// External sensor data byte 10
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x54, RO, EXT_SENS_DATA_11(ext_sens_data_11) { /// External sensor data byte 11
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x55, RO, EXT_SENS_DATA_12(ext_sens_data_12) { /// External sensor data byte 12
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x56, RO, EXT_SENS_DATA_13(ext_sens_data_13) { /// External sensor data byte 13
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x57, RO, EXT_SENS_DATA_14(ext_sens_data_14) { /// External sensor data byte 14
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x58, RO, EXT_SENS_DATA_15(ext_sens_data_15) { /// External sensor data byte 15
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x59, RO, EXT_SENS_DATA_16(ext_sens_data_16) { /// External sensor data byte 16
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x5A, RO, EXT_SENS_DATA_17(ext_sens_data_17) { /// External sensor data byte 17
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x5B, RO, EXT_SENS_DATA_18(ext_sens_data_18) { /// External sensor data byte 18
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x5C, RO, EXT_SENS_DATA_19(ext_sens_data_19) { /// External sensor data byte 19
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x5D, RO, EXT_SENS_DATA_20(ext_sens_data_20) { /// External sensor data byte 20
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x5E, RO, EXT_SENS_DATA_21(ext_sens_data_21) { /// External sensor data byte 21
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x5F, RO, EXT_SENS_DATA_22(ext_sens_data_22) { /// External sensor data byte 22
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x60, RO, EXT_SENS_DATA_23(ext_sens_data_23) { /// External sensor data byte 23
        value, 0, 7;  /// Data read by the auxiliary bus master
    }
    0x63, RW, I2C_SLV0_DO(i2c_slv0_do) { /// Slave 0 data out, reset 0x00
        value, 0, 7;  /// Byte written to the slave
    }
    0x64, RW, I2C_SLV1_DO(i2c_slv1_do) { /// Slave 1 data out, reset 0x00
        value, 0, 7;  /// Byte written to the slave
    }
    0x65, RW, I2C_SLV2_DO(i2c_slv2_do) { /// Slave 2 data out, reset 0x00
        value, 0, 7;  /// Byte written to the slave
    }
    0x66, RW, I2C_SLV3_DO(i2c_slv3_do) { /// Slave 3 data out, reset 0x00
        value, 0, 7;  /// Byte written to the slave
    }
    0x67, RW, I2C_MST_DELAY_CTRL(i2c_mst_delay_ctrl) { /// Slave access delay control, reset 0x00
        i2c_slv0_dly_en, 0, 0; /// Reduced access rate for slave 0
        i2c_slv1_dly_en, 1, 1; /// Reduced access rate for slave 1
        i2c_slv2_dly_en, 2, 2; /// Reduced access rate for slave 2
        i2c_slv3_dly_en, 3, 3; /// Reduced access rate for slave 3
        i2c_slv4_dly_en, 4, 4; /// Reduced access rate for slave 4
        delay_es_shadow, 7, 7; /// Shadow external sensor data until transfer completes
    }
    0x68, RW, SIGNAL_PATH_RESET(signal_path_reset) { /// Analog signal path reset, reset 0x00
        temp_reset, 0, 0;  /// Reset temperature signal path
        accel_reset, 1, 1; /// Reset accelerometer signal path
        gyro_reset, 2, 2;  /// Reset gyroscope signal path
    }
    0x69, RW, MOT_DETECT_CTRL(mot_detect_ctrl) { /// Motion detection control, reset 0x00
        accel_on_delay, 4, 5; /// Extra accelerometer power-on delay
    }
    0x6A, RW, USER_CTRL(user_ctrl) { /// User control, reset 0x00
        sig_cond_reset, 0, 0; /// Reset all signal paths and sensor registers
        i2c_mst_reset, 1, 1;  /// Reset the auxiliary bus master
        fifo_reset, 2, 2;     /// Reset the FIFO buffer
        i2c_if_dis, 4, 4;     /// Always 0 on the MPU6050
        i2c_mst_en, 5, 5;     /// Auxiliary bus master enable
        fifo_en, 6, 6;        /// FIFO buffer enable
    }
    0x6B, RW, PWR_MGMT_1(pwr_mgmt_1) { /// Power management 1, reset 0x40
        clksel, 0, 2;       /// Clock source selection
        temp_dis, 3, 3;     /// Temperature sensor disable
        cycle, 5, 5;        /// Cycle between sleep and sampling
        sleep, 6, 6;        /// Sleep mode enable
        device_reset, 7, 7; /// Reset all registers to their defaults
    }
    0x6C, RW, PWR_MGMT_2(pwr_mgmt_2) { /// Power management 2, reset 0x00
        stby_zg, 0, 0;       /// Z gyroscope standby
        stby_yg, 1, 1;       /// Y gyroscope standby
        stby_xg, 2, 2;       /// X gyroscope standby
        stby_za, 3, 3;       /// Z accelerometer standby
        stby_ya, 4, 4;       /// Y accelerometer standby
        stby_xa, 5, 5;       /// X accelerometer standby
        lp_wake_ctrl, 6, 7;  /// Wake-up frequency in cycle mode
    }
    0x72, RW, FIFO_COUNTH(fifo_counth) { /// FIFO byte count, high bits, reset 0x00
        value, 0, 7;  /// Count bits [15:8]
    }
    0x73, RW, FIFO_COUNTL(fifo_countl) { /// FIFO byte count, low bits, reset 0x00
        value, 0, 7;  /// Count bits [7:0]
    }
    0x74, RW, FIFO_R_W(fifo_r_w) { /// FIFO read/write port, reset 0x00
        value, 0, 7;  /// Next FIFO byte
    }
    0x75, RO, WHO_AM_I(who_am_i) { /// Device identification, reset 0x68
        value, 0, 7;  /// Fixed identification code
    }
}

#[cfg(test)]
mod test {
    extern crate alloc;
    use alloc::vec;

    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::*;

    #[test]
    fn read_who_am_i() {
        let expectations = [I2cTransaction::write_read(
            MMA8451Q_ADDR,
            vec![0x0D],
            vec![0x1A],
        )];
        let mut bus = I2cMock::new(&expectations);

        let mut regs = Registers::<_, { MMA8451Q_ADDR }>::new(&mut bus);
        let id = regs.who_am_i().read().unwrap().value();
        assert_eq!(id, 0x1A);

        bus.done();
    }

    #[test]
    fn modify_preserves_unrelated_bits() {
        // CTRL_REG1 starts with ACTIVE and ASLP_RATE bits set; changing the
        // data rate must not disturb them.
        let expectations = [
            I2cTransaction::write_read(MMA8451Q_ADDR, vec![0x2A], vec![0b1100_0001]),
            I2cTransaction::write(MMA8451Q_ADDR, vec![0x2A, 0b1101_1001]),
        ];
        let mut bus = I2cMock::new(&expectations);

        let mut regs = Registers::<_, { MMA8451Q_ADDR }>::new(&mut bus);
        regs.ctrl_reg1().modify(|_, w| w.dr(0b011)).unwrap();

        bus.done();
    }

    #[test]
    fn write_overwrites_whole_register() {
        // Unset fields go out as zero, without a prior read.
        let expectations = [I2cTransaction::write(MMA8451Q_ADDR, vec![0x0E, 0b0001_0010])];
        let mut bus = I2cMock::new(&expectations);

        let mut regs = Registers::<_, { MMA8451Q_ADDR }>::new(&mut bus);
        regs.xyz_data_cfg()
            .write(|w| w.fs(0b10).hpf_out(1))
            .unwrap();

        bus.done();
    }

    #[test]
    fn field_getters_extract_shifted_values() {
        let expectations = [I2cTransaction::write_read(
            MPU6050_ADDR,
            vec![0x1B],
            vec![0b0001_1000],
        )];
        let mut bus = I2cMock::new(&expectations);

        let mut regs = Registers::<_, { MPU6050_ADDR }>::new(&mut bus);
        let gyro_config = regs.gyro_config().read().unwrap();
        assert_eq!(gyro_config.fs_sel(), 0b11);
        assert_eq!(gyro_config.zg_st(), 0);
        assert_eq!(gyro_config.bits(), 0b0001_1000);

        bus.done();
    }
}
