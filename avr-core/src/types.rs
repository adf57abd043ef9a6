//! Core Types für UART- und PWM-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Obergrenze für Prozentwerte
pub const MAX_PERCENT: u8 = 100;

/// Duty-Anforderung in Prozent (0-100)
///
/// Der innere Wert liegt garantiert in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Percent(u8);

impl Percent {
    /// 100 % (Vollgas)
    pub const FULL: Self = Self(MAX_PERCENT);

    /// Erstellt einen Prozentwert, `None` wenn größer als 100
    pub const fn new(value: u8) -> Option<Self> {
        if value > MAX_PERCENT {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Erstellt einen Prozentwert und begrenzt auf 100
    pub const fn saturating(value: u8) -> Self {
        if value > MAX_PERCENT {
            Self::FULL
        } else {
            Self(value)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// 8-Bit Compare-Wert für OCR0A
///
/// Bei Fast PWM mit TOP = 0xFF entspricht 0 einem nahezu dauerhaft dunklen
/// Ausgang und 255 einem dauerhaft gesetzten Ausgang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DutyCycle(u8);

impl DutyCycle {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(u8::MAX);

    pub const fn from_compare(compare: u8) -> Self {
        Self(compare)
    }

    /// Roher Registerwert
    pub const fn compare(self) -> u8 {
        self.0
    }
}

/// Timer0 Clock Select (CS02:0)
///
/// Datasheet Table 14-9 "Clock Select Bit Description". Die externen
/// Taktquellen (T0-Pin) werden nicht unterstützt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prescaler {
    /// clk/1 (CS = 0b001)
    Direct,
    /// clk/8 (CS = 0b010)
    Div8,
    /// clk/64 (CS = 0b011)
    Div64,
    /// clk/256 (CS = 0b100)
    Div256,
    /// clk/1024 (CS = 0b101)
    Div1024,
}

impl Prescaler {
    /// Teiler N für die Frequenzformel f_PWM = f_clk / (N × 256)
    pub const fn divisor(self) -> u16 {
        match self {
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }

    /// Bitmuster für CS02:0 in TCCR0B
    pub const fn cs_bits(self) -> u8 {
        match self {
            Prescaler::Direct => 0b001,
            Prescaler::Div8 => 0b010,
            Prescaler::Div64 => 0b011,
            Prescaler::Div256 => 0b100,
            Prescaler::Div1024 => 0b101,
        }
    }
}

/// USART Baudraten-Einstellung (UBRR0 + U2X0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsartTiming {
    /// Wert für UBRR0 (12 Bit)
    pub ubrr: u16,
    /// Double-Speed Modus (U2X0 in UCSR0A)
    pub u2x: bool,
}

/// Ausgabeformat der Hello-World Schleife
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreetingMode {
    /// Fester Text: "Hello World "
    #[default]
    Plain,
    /// Text mit fortlaufendem Zähler: "Hello World 0", "Hello World 1", ...
    Counting,
}

// ============================================================================
// ufmt::uDisplay Implementations (optional feature)
// ============================================================================

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for Percent {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uwrite!(f, "{}%", self.0)
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for DutyCycle {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uwrite!(f, "OCR0A={}", self.0)
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for Prescaler {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uwrite!(f, "clk/{}", self.divisor())
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for UsartTiming {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uwrite!(f, "UBRR0={} U2X0={}", self.ubrr, self.u2x as u8)
    }
}
