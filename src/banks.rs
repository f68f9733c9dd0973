//! Swedish clearing-number blocks compiled into the crate.
//!
//! Columns: bank code, first clearing number, last clearing number,
//! clearing code length, serial number length, zero-fill serial number,
//! include clearing code. Narrow exceptions are listed before the broad
//! blocks they overlap.

pub(crate) type BankRow = (&'static str, u32, u32, usize, usize, bool, bool);

pub(crate) const SWEDISH_BANKS: &[BankRow] = &[
    // Nordea
    ("300", 1100, 1199, 4, 7, false, true),
    // Danske Bank
    ("120", 1200, 1399, 4, 7, false, true),
    // Nordea
    ("300", 1400, 2099, 4, 7, false, true),
    // Ålandsbanken
    ("230", 2300, 2399, 4, 7, false, true),
    // Danske Bank
    ("120", 2400, 2499, 4, 7, false, true),
    // Nordea
    ("300", 3000, 3299, 4, 7, false, true),
    // Nordea personal accounts
    ("300", 3300, 3300, 4, 10, true, false),
    ("300", 3301, 3399, 4, 7, false, true),
    // Länsförsäkringar Bank
    ("902", 3400, 3409, 4, 7, false, true),
    // Nordea personal accounts
    ("300", 3782, 3782, 4, 10, true, false),
    ("300", 3400, 3999, 4, 7, false, true),
    ("300", 4000, 4999, 4, 7, false, true),
    // SEB
    ("500", 5000, 5999, 4, 7, false, true),
    // Handelsbanken
    ("600", 6000, 6999, 4, 9, true, false),
    // Swedbank
    ("800", 7000, 7999, 4, 7, false, true),
    ("800", 8000, 8999, 5, 10, true, true),
    // Länsförsäkringar Bank
    ("902", 9020, 9029, 4, 7, false, true),
    // Citibank
    ("904", 9040, 9049, 4, 7, false, true),
    // Nordnet Bank
    ("910", 9100, 9109, 4, 7, false, true),
    // Skandiabanken
    ("915", 9150, 9169, 4, 7, false, true),
    // Danske Bank
    ("918", 9180, 9189, 4, 10, true, false),
    // DNB Bank
    ("919", 9190, 9199, 4, 7, false, true),
    // Marginalen Bank
    ("923", 9230, 9239, 4, 7, false, true),
    // SBAB Bank
    ("925", 9250, 9259, 4, 7, false, true),
    // ICA Banken
    ("927", 9270, 9279, 4, 7, false, true),
    // Resurs Bank
    ("928", 9280, 9289, 4, 7, false, true),
    // Sparbanken Öresund
    ("930", 9300, 9349, 4, 10, true, false),
    // Forex Bank
    ("940", 9400, 9449, 4, 7, false, true),
    // Plusgirot
    ("950", 9500, 9549, 4, 10, true, false),
    // Avanza Bank
    ("955", 9550, 9569, 4, 7, false, true),
    // Sparbanken Syd
    ("957", 9570, 9579, 4, 10, true, false),
    // Lån & Spar Bank
    ("964", 9630, 9639, 4, 7, false, true),
    // Amfa Bank
    ("966", 9660, 9669, 4, 7, false, true),
    // JAK Medlemsbank
    ("967", 9670, 9679, 4, 7, false, true),
    // Ekobanken
    ("970", 9700, 9709, 4, 7, false, true),
    // Riksgälden
    ("988", 9880, 9889, 4, 8, true, false),
    ("989", 9890, 9899, 4, 10, true, false),
    // Plusgirot
    ("950", 9960, 9969, 4, 10, true, false),
];
