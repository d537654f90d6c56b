//! SC144xx hardware register database (currently only SC14481).
//!
//! Chip data only; the loading engine lives in `regload`.

use regload::Width::{Byte, Word};
use regload::{Permissions, RegionSpec, RegisterTable, Width};

/// The SC14481 special-function-register map.
///
/// `DIP_STACK_REG` and `DIP_STACK_REG.STACK_REG` intentionally alias the
/// same word at 0xFF_6000.
pub const REGS_SC14481: &[(&str, u32, Width)] = &[
    ("CLK_AMBA_REG", 0xFF_4000, Word),
    ("CLK_CODEC_DIV_REG", 0xFF_4002, Word),
    ("CLK_CODEC_REG", 0xFF_4004, Word),
    ("CLK_DSP_REG", 0xFF_4006, Word),
    ("CLK_FREQ_TRIM_REG", 0xFF_400A, Word),
    ("CLK_PER_DIV_REG", 0xFF_400C, Word),
    ("CLK_PER10_DIV_REG", 0xFF_400E, Word),
    ("CLK_PLL_CTRL_REG", 0xFF_4010, Word),
    ("CLK_PLL_DIV_REG", 0xFF_4012, Word),
    ("CLK_XTAL_CTRL_REG", 0xFF_4018, Word),
    ("CLK_AUX_REG", 0xFF_401A, Word),
    ("CLK_PCM_DIV_REG", 0xFF_401C, Word),
    ("CLK_ULP_CTRL_REG", 0xFF_401E, Word),
    ("DMA0_A_STARTL_REG", 0xFF_4400, Word),
    ("DMA0_A_STARTH_REG", 0xFF_4402, Word),
    ("DMA0_B_STARTL_REG", 0xFF_4404, Word),
    ("DMA0_B_STARTH_REG", 0xFF_4406, Word),
    ("DMA0_INT_REG", 0xFF_4408, Word),
    ("DMA0_LEN_REG", 0xFF_440A, Word),
    ("DMA0_CTRL_REG", 0xFF_440C, Word),
    ("DMA0_IDX_REG", 0xFF_440E, Word),
    ("DMA1_A_STARTL_REG", 0xFF_4410, Word),
    ("DMA1_A_STARTH_REG", 0xFF_4412, Word),
    ("DMA1_B_STARTL_REG", 0xFF_4414, Word),
    ("DMA1_B_STARTH_REG", 0xFF_4416, Word),
    ("DMA1_INT_REG", 0xFF_4418, Word),
    ("DMA1_LEN_REG", 0xFF_441A, Word),
    ("DMA1_CTRL_REG", 0xFF_441C, Word),
    ("DMA1_IDX_REG", 0xFF_441E, Word),
    ("DMA2_A_STARTL_REG", 0xFF_4420, Word),
    ("DMA2_A_STARTH_REG", 0xFF_4422, Word),
    ("DMA2_B_STARTL_REG", 0xFF_4424, Word),
    ("DMA2_B_STARTH_REG", 0xFF_4426, Word),
    ("DMA2_INT_REG", 0xFF_4428, Word),
    ("DMA2_LEN_REG", 0xFF_442A, Word),
    ("DMA2_CTRL_REG", 0xFF_442C, Word),
    ("DMA2_IDX_REG", 0xFF_442E, Word),
    ("DMA3_A_STARTL_REG", 0xFF_4430, Word),
    ("DMA3_A_STARTH_REG", 0xFF_4432, Word),
    ("DMA3_B_STARTL_REG", 0xFF_4434, Word),
    ("DMA3_B_STARTH_REG", 0xFF_4436, Word),
    ("DMA3_INT_REG", 0xFF_4438, Word),
    ("DMA3_LEN_REG", 0xFF_443A, Word),
    ("DMA3_CTRL_REG", 0xFF_443C, Word),
    ("DMA3_IDX_REG", 0xFF_443E, Word),
    ("TEST_ENV_REG", 0xFF_4800, Word),
    ("TEST_CTRL_REG", 0xFF_4802, Word),
    ("TEST_CTRL2_REG", 0xFF_4804, Word),
    ("TEST_CTRL3_REG", 0xFF_4806, Word),
    ("BANDGAP_REG", 0xFF_4810, Word),
    ("BAT_CTRL_REG", 0xFF_4812, Word),
    ("BAT_CTRL2_REG", 0xFF_4814, Word),
    ("BAT_STATUS_REG", 0xFF_4816, Word),
    ("BAT_SOC_HIGH_REG", 0xFF_4818, Word),
    ("BAT_SOC_LOW_REG", 0xFF_481A, Word),
    ("CP_CTRL_REG", 0xFF_481C, Word),
    ("PAD_CTRL_REG", 0xFF_481E, Word),
    ("LED_CTRL_REG", 0xFF_4820, Word),
    ("CP_CTRL2_REG", 0xFF_4822, Word),
    ("P0_DATA_REG", 0xFF_4830, Word),
    ("P0_SET_DATA_REG", 0xFF_4832, Word),
    ("P0_RESET_DATA_REG", 0xFF_4834, Word),
    ("P0_DIR_REG", 0xFF_4836, Word),
    ("P0_MODE_REG", 0xFF_4838, Word),
    ("P1_DATA_REG", 0xFF_4840, Word),
    ("P1_SET_DATA_REG", 0xFF_4842, Word),
    ("P1_RESET_DATA_REG", 0xFF_4844, Word),
    ("P1_DIR_REG", 0xFF_4846, Word),
    ("P1_MODE_REG", 0xFF_4848, Word),
    ("P2_DATA_REG", 0xFF_4850, Word),
    ("P2_SET_DATA_REG", 0xFF_4852, Word),
    ("P2_RESET_DATA_REG", 0xFF_4854, Word),
    ("P2_DIR_REG", 0xFF_4856, Word),
    ("P2_MODE_REG", 0xFF_4858, Word),
    ("P3_DATA_REG", 0xFF_4860, Word),
    ("P3_SET_DATA_REG", 0xFF_4862, Word),
    ("P3_RESET_DATA_REG", 0xFF_4864, Word),
    ("P3_DIR_REG", 0xFF_4866, Word),
    ("P3_MODE_REG", 0xFF_4868, Word),
    ("P4_DATA_REG", 0xFF_4870, Word),
    ("P4_SET_DATA_REG", 0xFF_4872, Word),
    ("P4_RESET_DATA_REG", 0xFF_4874, Word),
    ("P4_DIR_REG", 0xFF_4876, Word),
    ("P4_MODE_REG", 0xFF_4878, Word),
    ("P5_DATA_REG", 0xFF_4880, Word),
    ("P5_SET_DATA_REG", 0xFF_4882, Word),
    ("P5_RESET_DATA_REG", 0xFF_4884, Word),
    ("P5_DIR_REG", 0xFF_4886, Word),
    ("P5_MODE_REG", 0xFF_4888, Word),
    ("PORT_TRACE_CTRL_REG", 0xFF_48E0, Word),
    ("UART_CTRL_REG", 0xFF_4900, Word),
    ("UART_RX_TX_REG", 0xFF_4902, Word),
    ("UART_CLEAR_TX_INT_REG", 0xFF_4904, Word),
    ("UART_CLEAR_RX_INT_REG", 0xFF_4906, Word),
    ("UART_ERROR_REG", 0xFF_4908, Word),
    ("UART2_CTRL_REG", 0xFF_4910, Word),
    ("UART2_RX_TX_REG", 0xFF_4912, Word),
    ("UART2_CLEAR_TX_INT_REG", 0xFF_4914, Word),
    ("UART2_CLEAR_RX_INT_REG", 0xFF_4916, Word),
    ("UART2_ERROR_REG", 0xFF_4918, Word),
    ("ACCESS1_IN_OUT_REG", 0xFF_4920, Word),
    ("ACCESS1_CTRL_REG", 0xFF_4922, Word),
    ("ACCESS1_CLEAR_INT_REG", 0xFF_4924, Word),
    ("ACCESS2_IN_OUT_REG", 0xFF_4930, Word),
    ("ACCESS2_CTRL_REG", 0xFF_4932, Word),
    ("ACCESS2_CLEAR_INT_REG", 0xFF_4934, Word),
    ("SPI_CTRL_REG", 0xFF_4940, Word),
    ("SPI_RX_TX_REG0", 0xFF_4942, Word),
    ("SPI_RX_TX_REG1", 0xFF_4944, Word),
    ("SPI_CLEAR_INT_REG", 0xFF_4946, Word),
    ("SPI2_CTRL_REG", 0xFF_4950, Word),
    ("SPI2_CLEAR_INT_REG", 0xFF_4956, Word),
    ("ADC_CTRL_REG", 0xFF_4960, Word),
    ("ADC_CTRL1_REG", 0xFF_4962, Word),
    ("ADC_CLEAR_INT_REG", 0xFF_4964, Word),
    ("ADC0_REG", 0xFF_4966, Word),
    ("ADC1_REG", 0xFF_4968, Word),
    ("TIMER_CTRL_REG", 0xFF_4970, Word),
    ("TIMER0_ON_REG", 0xFF_4972, Word),
    ("TIMER0_RELOAD_M_REG", 0xFF_4974, Word),
    ("TIMER0_RELOAD_N_REG", 0xFF_4976, Word),
    ("TIMER1_RELOAD_M_REG", 0xFF_4978, Word),
    ("TIMER1_RELOAD_N_REG", 0xFF_497A, Word),
    ("TIMER2_DUTY1_REG", 0xFF_497C, Word),
    ("TIMER2_DUTY2_REG", 0xFF_497E, Word),
    ("TIMER2_FREQ_REG", 0xFF_4980, Word),
    ("TIMER2_DUTY3_REG", 0xFF_4982, Word),
    ("TONE_CTRL1_REG", 0xFF_4990, Word),
    ("TONE_COUNTER1_REG", 0xFF_4992, Word),
    ("TONE_LATCH1_REG", 0xFF_4994, Word),
    ("TONE_CLEAR_INT1_REG", 0xFF_4996, Word),
    ("TONE_CTRL2_REG", 0xFF_4998, Word),
    ("TONE_COUNTER2_REG", 0xFF_499A, Word),
    ("TONE_LATCH2_REG", 0xFF_499C, Word),
    ("TONE_CLEAR_INT2_REG", 0xFF_499E, Word),
    ("KEY_GP_INT_REG", 0xFF_49B0, Word),
    ("KEY_BOARD_INT_REG", 0xFF_49B2, Word),
    ("KEY_DEBOUNCE_REG", 0xFF_49B4, Word),
    ("KEY_STATUS_REG", 0xFF_49B6, Word),
    ("LCD_CTRL_REG", 0xFF_49C0, Word),
    ("LCD_DAC_REG", 0xFF_49C2, Word),
    ("ULP_CTRL_REG", 0xFF_4A00, Word),
    ("ULP_INT_REG", 0xFF_4A02, Word),
    ("ULP_PORT_REG", 0xFF_4A04, Word),
    ("ULP_PHASE_REG", 0xFF_4A06, Word),
    ("ULP_TIMERL_REG", 0xFF_4A08, Word),
    ("ULP_TIMERH_REG", 0xFF_4A0A, Word),
    ("ULP_WAKEUPL_REG", 0xFF_4A0C, Word),
    ("ULP_WAKEUPH_REG", 0xFF_4A0E, Word),
    ("ULP_STATUS_REG", 0xFF_4A10, Word),
    ("ULP_TEST_REG", 0xFF_4A12, Word),
    ("WATCHDOG_REG", 0xFF_4C00, Word),
    ("SET_FREEZE_REG", 0xFF_5000, Word),
    ("RESET_FREEZE_REG", 0xFF_5002, Word),
    ("DEBUG_REG", 0xFF_5004, Word),
    ("MEM_CONFIG_REG", 0xFF_5006, Word),
    ("TRACE_CTRL_REG", 0xFF_5020, Word),
    ("TRACE_STATUS_REG", 0xFF_5022, Word),
    ("TRACE_START0_REG", 0xFF_5024, Word),
    ("TRACE_LEN0_REG", 0xFF_5026, Word),
    ("TRACE_START1_REG", 0xFF_5028, Word),
    ("TRACE_LEN1_REG", 0xFF_502A, Word),
    ("TRACE_TIMERL_REG", 0xFF_502C, Word),
    ("TRACE_TIMERH_REG", 0xFF_502E, Word),
    ("SET_INT_PENDING_REG", 0xFF_5400, Word),
    ("RESET_INT_PENDING_REG", 0xFF_5402, Word),
    ("INT0_PRIORITY_REG", 0xFF_5404, Word),
    ("INT1_PRIORITY_REG", 0xFF_5406, Word),
    ("INT2_PRIORITY_REG", 0xFF_5408, Word),
    ("INT3_PRIORITY_REG", 0xFF_540A, Word),
    ("PC_START_REG", 0xFF_540C, Word),
    ("CODEC_MIC_REG", 0xFF_5800, Word),
    ("CODEC_LSR_REG", 0xFF_5802, Word),
    ("CODEC_VREF_REG", 0xFF_5804, Word),
    ("CODEC_TONE_REG", 0xFF_5806, Word),
    ("CODEC_ADDA_REG", 0xFF_5808, Word),
    ("CODEC_OFFSET1_REG", 0xFF_580A, Word),
    ("CODEC_TEST_CTRL_REG", 0xFF_580C, Word),
    ("CODEC_OFFSET2_REG", 0xFF_580E, Word),
    ("CODEC_MIC2_REG", 0xFF_5810, Word),
    ("CODEC_MIC2_OFFSET1_REG", 0xFF_5812, Word),
    ("CODEC_MIC2_OFFSET2_REG", 0xFF_5814, Word),
    ("CODEC_MIC_AUTO_REG", 0xFF_5816, Word),
    ("CODEC_LSR_AUTO_REG", 0xFF_5818, Word),
    ("CLASSD_CTRL_REG", 0xFF_5C00, Word),
    ("CLASSD_CLEAR_INT_REG", 0xFF_5C02, Word),
    ("CLASSD_BUZZER_REG", 0xFF_5C04, Word),
    ("CLASSD_TEST_REG", 0xFF_5C06, Word),
    ("CLASSD_NR_REG", 0xFF_5C08, Word),
    ("CLASSD_MIC2_REG", 0xFF_5C0A, Word),
    ("DIP_STACK_REG", 0xFF_6000, Word),
    ("DIP_STACK_REG.STACK_REG", 0xFF_6000, Word),
    ("DIP_PC_REG", 0xFF_6002, Word),
    ("DIP_STATUS_REG", 0xFF_6004, Word),
    ("DIP_CTRL_REG", 0xFF_6006, Word),
    ("DIP_STATUS1_REG", 0xFF_6008, Word),
    ("DIP_CTRL1_REG", 0xFF_600A, Word),
    ("DIP_SLOT_NUMBER_REG", 0xFF_600C, Word),
    ("DIP_CTRL2_REG", 0xFF_600E, Word),
    ("DIP_MOD_SEL_REG", 0xFF_6012, Word),
    ("DIP_MOD_VAL_REG", 0xFF_6014, Word),
    ("DIP_DC01_REG", 0xFF_6016, Word),
    ("DIP_DC23_REG", 0xFF_6018, Word),
    ("DIP_DC34_REG", 0xFF_601A, Word),
    ("BMC_CTRL_REG", 0xFF_6400, Word),
    ("BMC_CTRL2_REG", 0xFF_6402, Word),
    ("BMC_TX_SFIELDL_REG", 0xFF_6404, Word),
    ("BMC_TX_SFIELDH_REG", 0xFF_6406, Word),
    ("BMC_RX_SFIELDL_REG", 0xFF_6408, Word),
    ("BMC_RX_SFIELDH_REG", 0xFF_640A, Word),
    ("RF_BURST_MODE_CTRL_REG", 0xFF_7000, Word),
    ("RF_ALW_EN_REG", 0xFF_7008, Word),
    ("RF_PORT_RSSI_SI_REG", 0xFF_700A, Word),
    ("RF_TX_SI_REG", 0xFF_700C, Word),
    ("RF_RX_SI_REG", 0xFF_700E, Word),
    ("RF_PORT1_DCF_REG", 0xFF_7010, Word),
    ("RF_PORT2_DCF_REG", 0xFF_7012, Word),
    ("RF_PA_DRIVER_STAGE_DCF_REG", 0xFF_7014, Word),
    ("RF_PA_FINAL_STAGE_DCF_REG", 0xFF_7016, Word),
    ("RF_PLLCLOSED_DCF_REG", 0xFF_7018, Word),
    ("RF_SYNTH_DCF_REG", 0xFF_701A, Word),
    ("RF_BIAS_DCF_REG", 0xFF_701C, Word),
    ("RF_RSSIPH_DCF_REG", 0xFF_701E, Word),
    ("RF_DEM_DCF_REG", 0xFF_7020, Word),
    ("RF_ADC_DCF_REG", 0xFF_7022, Word),
    ("RF_IF_DCF_REG", 0xFF_7024, Word),
    ("RF_LNAMIX_DCF_REG", 0xFF_7026, Word),
    ("RF_PA_DCF_REG", 0xFF_7028, Word),
    ("RF_FAD_WINDOW_DCF_REG", 0xFF_702A, Word),
    ("RF_RFCAL_CTRL_REG", 0xFF_7040, Word),
    ("RF_DEM_CTRL_REG", 0xFF_7044, Word),
    ("RF_PREAMBLE_REG", 0xFF_7046, Word),
    ("RF_RSSI_REG", 0xFF_7048, Word),
    ("RF_PORT_CTRL_REG", 0xFF_704A, Word),
    ("RF_PAD_IO_REG", 0xFF_704C, Word),
    ("RF_PLL_CTRL1_REG", 0xFF_7050, Word),
    ("RF_PLL_CTRL2_REG", 0xFF_7052, Word),
    ("RF_PLL_CTRL3_REG", 0xFF_7054, Word),
    ("RF_PLL_CTRL4_REG", 0xFF_7056, Word),
    ("RF_SLICER_REG", 0xFF_7058, Word),
    ("RF_SLICER_RESULT_REG", 0xFF_705A, Word),
    ("RF_GAUSS_GAIN_RESULT_REG", 0xFF_705C, Word),
    ("RF_BURST_MODE_SHADOW1_REG", 0xFF_7070, Word),
    ("RF_BURST_MODE_SHADOW2_REG", 0xFF_7072, Word),
    ("RF_DCF_MONITOR_REG", 0xFF_7074, Word),
    ("RF_SYNTH_CTRL1_REG", 0xFF_7080, Word),
    ("RF_SYNTH_CTRL2_REG", 0xFF_7082, Word),
    ("RF_AGC_REG", 0xFF_7084, Word),
    ("RF_AGC12_TH_REG", 0xFF_7086, Word),
    ("RF_AGC12_ALPHA_REG", 0xFF_7088, Word),
    ("RF_POSITIONING_REG", 0xFF_708A, Word),
    ("RF_DC_OFFSET_REG", 0xFF_708C, Word),
    ("RF_DC_OFFSET34_REG", 0xFF_708E, Word),
    ("RF_IQ_DC_OFFSET_REG", 0xFF_7090, Word),
    ("RF_IF_CTRL_REG", 0xFF_7092, Word),
    ("RF_REF_OSC_REG", 0xFF_7094, Word),
    ("RF_ADC_CTRL_REG", 0xFF_7096, Word),
    ("RF_RFIO_CTRL_REG", 0xFF_7098, Word),
    ("RF_BIAS_CTRL_REG", 0xFF_709A, Word),
    ("RF_DRIFT_TEST_REG", 0xFF_709C, Word),
    ("RF_TEST_MODE_REG", 0xFF_709E, Word),
    ("RF_LDO_TEST_REG", 0xFF_70A0, Word),
    ("RF_PLL_CTRL5_REG", 0xFF_70AC, Word),
    ("RF_PLL_CTRL6_REG", 0xFF_70AE, Word),
    ("RF_BBADC_CTRL_REG", 0xFF_70B0, Word),
    ("RF_PA_CTRL1_REG", 0xFF_70B2, Word),
    ("RF_PA_CTRL2_REG", 0xFF_70B4, Word),
    ("RF_IFCAL_RESULT_REG", 0xFF_70B6, Word),
    ("RF_DC_OFFSET12_REG", 0xFF_70B8, Word),
    ("RF_AGC_RESULT_REG", 0xFF_70BA, Word),
    ("RF_GAUSS_GAIN_MSB_REG", 0xFF_70BC, Word),
    ("RF_RXFE_CTRL_REG", 0xFF_70BE, Word),
    ("RF_FAFC_CTRL_REG", 0xFF_70C0, Word),
    ("RF_FAFC_RESULT_REG", 0xFF_70C2, Word),
    ("RF_TEST_MODE2_REG", 0xFF_70C4, Word),
    ("FLASH_CTRL_REG", 0xFF_7400, Word),
    ("FLASH_PTNVH1_REG", 0xFF_7402, Word),
    ("FLASH_PTPROG_REG", 0xFF_7404, Word),
    ("FLASH_PTERASE_REG", 0xFF_7406, Word),
    ("FLASH_PTME_REG", 0xFF_7408, Word),
    ("CHIP_TEST1_REG", 0xFF_FBF4, Byte),
    ("CHIP_TEST2_REG", 0xFF_FBF5, Byte),
    ("CHIP_ID1_REG", 0xFF_FBF8, Byte),
    ("CHIP_ID2_REG", 0xFF_FBF9, Byte),
    ("CHIP_ID3_REG", 0xFF_FBFA, Byte),
    ("CHIP_MEM_SIZE_REG", 0xFF_FBFB, Byte),
    ("CHIP_REVISION_REG", 0xFF_FBFC, Byte),
    ("CHIP_CONFIG1_REG", 0xFF_FBFD, Byte),
    ("CHIP_CONFIG2_REG", 0xFF_FBFE, Byte),
    ("CHIP_CONFIG3_REG", 0xFF_FBFF, Byte),
];

/// The SFR block backing the register map: volatile, read/write,
/// non-executable, uninitialized.
pub fn sfr_region() -> RegionSpec {
    RegionSpec {
        name: "sfr".into(),
        start: 0xFF_0000,
        length: 0xFF_FC00 - 0xFF_0000,
        volatile: true,
        initialized: false,
        perms: Permissions { r: true, w: true, x: false },
    }
}

/// Region set for the SC14481.
pub fn regions() -> Vec<RegionSpec> {
    vec![sfr_region()]
}

/// The SC14481 table as a loadable `RegisterTable`.
pub fn table() -> RegisterTable {
    RegisterTable::from_rows(REGS_SC14481)
}
