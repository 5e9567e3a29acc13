//! test data shared between the maxprof crates.

pub mod maxp {

    /// A freshly constructed record: version 1.0, two zones, everything else zero.
    #[rustfmt::skip]
    pub static DEFAULT: &[u8] = &[
        0x00, 0x01, 0x00, 0x00, // version 1.0
        0x00, 0x00,             // numGlyphs
        0x00, 0x00,             // maxPoints
        0x00, 0x00,             // maxContours
        0x00, 0x00,             // maxComponentPoints
        0x00, 0x00,             // maxComponentContours
        0x00, 0x02,             // maxZones 2
        0x00, 0x00,             // maxTwilightPoints
        0x00, 0x00,             // maxStorage
        0x00, 0x00,             // maxFunctionDefs
        0x00, 0x00,             // maxInstructionDefs
        0x00, 0x00,             // maxStackElements
        0x00, 0x00,             // maxSizeOfInstructions
        0x00, 0x00,             // maxComponentElements
        0x00, 0x00,             // maxComponentDepth
    ];

    /// The record of a hinted TrueType font.
    #[rustfmt::skip]
    pub static TRUETYPE: &[u8] = &[
        0x00, 0x01, 0x00, 0x00, // version 1.0
        0x05, 0x0E,             // numGlyphs 1294
        0x01, 0x03,             // maxPoints 259
        0x00, 0x28,             // maxContours 40
        0x00, 0x8E,             // maxComponentPoints 142
        0x00, 0x0C,             // maxComponentContours 12
        0x00, 0x02,             // maxZones 2
        0x00, 0x10,             // maxTwilightPoints 16
        0x00, 0x2F,             // maxStorage 47
        0x00, 0x5E,             // maxFunctionDefs 94
        0x00, 0x00,             // maxInstructionDefs 0
        0x04, 0x15,             // maxStackElements 1045
        0x0A, 0xAB,             // maxSizeOfInstructions 2731
        0x00, 0x03,             // maxComponentElements 3
        0x00, 0x01,             // maxComponentDepth 1
    ];

    /// Every bit set. None of the fields may come back negative.
    pub static ALL_ONES: &[u8] = &[0xFF; 32];

    /// A version 0.5 (CFF) header, zero padded to the full record length.
    #[rustfmt::skip]
    pub static VERSION_0_5: &[u8] = &[
        0x00, 0x00, 0x50, 0x00, // version 0.5
        0x00, 0x05,             // numGlyphs 5
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
}
