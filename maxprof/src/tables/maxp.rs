//! The [maxp](https://learn.microsoft.com/en-us/typography/opentype/spec/maxp) table

use std::fmt;

use types::{BigEndian, FixedSize, Tag, Version16Dot16};

use crate::{
    font_data::FontData,
    read::{FontRead, FormatError},
    tables::TopLevelTable,
    write::{FontWrite, TableWriter},
};

/// 'maxp'
pub const TAG: Tag = Tag::new(b"maxp");

/// The length of the record, in bytes.
pub const MAXP_LEN: usize = 32;

// width of the name column in `MaxProfile::describe`
const NAME_COLUMN_WIDTH: usize = 22;

/// The raw layout of the [maxp] record.
///
/// Every field is stored big-endian, with no padding.
///
/// [maxp]: https://learn.microsoft.com/en-us/typography/opentype/spec/maxp
#[derive(Copy, Clone, Debug, bytemuck::AnyBitPattern, bytemuck::NoUninit)]
#[repr(C, packed)]
pub struct MaxpFixedFields {
    pub version: BigEndian<Version16Dot16>,
    pub num_glyphs: BigEndian<u16>,
    pub max_points: BigEndian<u16>,
    pub max_contours: BigEndian<u16>,
    pub max_component_points: BigEndian<u16>,
    pub max_component_contours: BigEndian<u16>,
    pub max_zones: BigEndian<u16>,
    pub max_twilight_points: BigEndian<u16>,
    pub max_storage: BigEndian<u16>,
    pub max_function_defs: BigEndian<u16>,
    pub max_instruction_defs: BigEndian<u16>,
    pub max_stack_elements: BigEndian<u16>,
    pub max_size_of_instructions: BigEndian<u16>,
    pub max_component_elements: BigEndian<u16>,
    pub max_component_depth: BigEndian<u16>,
}

const _: () = assert!(std::mem::size_of::<MaxpFixedFields>() == MAXP_LEN);

/// Note: this requires `MaxpFixedFields` to be `repr(packed)`.
impl FixedSize for MaxpFixedFields {
    const RAW_BYTE_LEN: usize = std::mem::size_of::<Self>();
}

/// A zero-copy view of a [maxp] record.
///
/// [maxp]: https://learn.microsoft.com/en-us/typography/opentype/spec/maxp
#[derive(Clone, Copy)]
pub struct Maxp<'a> {
    fields: &'a MaxpFixedFields,
}

impl<'a> FontRead<'a> for Maxp<'a> {
    fn read(data: FontData<'a>) -> Result<Self, FormatError> {
        bytemuck::try_from_bytes(data.as_bytes())
            .map(|fields| Maxp { fields })
            .map_err(|_| FormatError::BadSize(data.len()))
    }
}

impl<'a> Maxp<'a> {
    /// Returns a reference to the raw fields of this record.
    pub fn fixed_fields(&self) -> &'a MaxpFixedFields {
        self.fields
    }

    /// The underlying bytes, exactly [`MAXP_LEN`] of them.
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::bytes_of(self.fields)
    }

    /// The version: 0x00005000 for version 0.5, 0x00010000 for version 1.0.
    pub fn version(&self) -> Version16Dot16 {
        self.fields.version.get()
    }

    /// The number of glyphs in the font.
    pub fn num_glyphs(&self) -> u16 {
        self.fields.num_glyphs.get()
    }

    /// Maximum points in a non-composite glyph.
    pub fn max_points(&self) -> u16 {
        self.fields.max_points.get()
    }

    /// Maximum contours in a non-composite glyph.
    pub fn max_contours(&self) -> u16 {
        self.fields.max_contours.get()
    }

    /// Maximum points in a composite glyph.
    pub fn max_component_points(&self) -> u16 {
        self.fields.max_component_points.get()
    }

    /// Maximum contours in a composite glyph.
    pub fn max_component_contours(&self) -> u16 {
        self.fields.max_component_contours.get()
    }

    /// 1 if instructions do not use the twilight zone (Z0), or 2 if
    /// instructions do use Z0; should be set to 2 in most cases.
    pub fn max_zones(&self) -> u16 {
        self.fields.max_zones.get()
    }

    /// Maximum points used in Z0.
    pub fn max_twilight_points(&self) -> u16 {
        self.fields.max_twilight_points.get()
    }

    /// Number of Storage Area locations.
    pub fn max_storage(&self) -> u16 {
        self.fields.max_storage.get()
    }

    /// Number of FDEFs, equal to the highest function number + 1.
    pub fn max_function_defs(&self) -> u16 {
        self.fields.max_function_defs.get()
    }

    /// Number of IDEFs.
    pub fn max_instruction_defs(&self) -> u16 {
        self.fields.max_instruction_defs.get()
    }

    /// Maximum stack depth across Font Program ('fpgm' table), CVT Program
    /// ('prep' table) and all glyph instructions (in the 'glyf' table).
    pub fn max_stack_elements(&self) -> u16 {
        self.fields.max_stack_elements.get()
    }

    /// Maximum byte count for glyph instructions.
    pub fn max_size_of_instructions(&self) -> u16 {
        self.fields.max_size_of_instructions.get()
    }

    /// Maximum number of components referenced at “top level” for any
    /// composite glyph.
    pub fn max_component_elements(&self) -> u16 {
        self.fields.max_component_elements.get()
    }

    /// Maximum levels of recursion; 1 for simple components.
    pub fn max_component_depth(&self) -> u16 {
        self.fields.max_component_depth.get()
    }

    /// Copy the fields of this view into an owned [`MaxProfile`].
    pub fn to_owned_table(&self) -> MaxProfile {
        MaxProfile::from(*self)
    }
}

impl TopLevelTable for Maxp<'_> {
    const TAG: Tag = TAG;
}

impl fmt::Debug for Maxp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Maxp").field(self.fields).finish()
    }
}

/// The resource limits declared by a font, as an owned value.
///
/// A freshly constructed record is version 1.0 with `max_zones` set to 2 and
/// every other field zero; a font builder fills in the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxProfile {
    pub version: Version16Dot16,
    pub num_glyphs: u16,
    pub max_points: u16,
    pub max_contours: u16,
    pub max_component_points: u16,
    pub max_component_contours: u16,
    pub max_zones: u16,
    pub max_twilight_points: u16,
    pub max_storage: u16,
    pub max_function_defs: u16,
    pub max_instruction_defs: u16,
    pub max_stack_elements: u16,
    pub max_size_of_instructions: u16,
    pub max_component_elements: u16,
    pub max_component_depth: u16,
}

impl Default for MaxProfile {
    fn default() -> Self {
        MaxProfile {
            version: Version16Dot16::VERSION_1_0,
            num_glyphs: 0,
            max_points: 0,
            max_contours: 0,
            max_component_points: 0,
            max_component_contours: 0,
            max_zones: 2,
            max_twilight_points: 0,
            max_storage: 0,
            max_function_defs: 0,
            max_instruction_defs: 0,
            max_stack_elements: 0,
            max_size_of_instructions: 0,
            max_component_elements: 0,
            max_component_depth: 0,
        }
    }
}

impl MaxProfile {
    /// The encoded length of every record, in bytes.
    pub const fn len() -> usize {
        MAXP_LEN
    }

    /// Decode a record from exactly [`MAXP_LEN`] bytes.
    ///
    /// Field values are not range-checked; a `max_zones` outside of 1..=2 is
    /// passed through as-is.
    pub fn decode(bytes: &[u8]) -> Result<MaxProfile, FormatError> {
        let maxp = Maxp::read(FontData::new(bytes))?;
        log::trace!(
            "decoded maxp version {} with {} glyphs",
            maxp.version(),
            maxp.num_glyphs()
        );
        if !matches!(maxp.max_zones(), 1 | 2) {
            log::warn!("maxp has unexpected maxZones value {}", maxp.max_zones());
        }
        Ok(maxp.to_owned_table())
    }

    /// Encode this record as [`MAXP_LEN`] big-endian bytes.
    pub fn encode(&self) -> [u8; MAXP_LEN] {
        let fields = self.to_fixed_fields();
        let mut out = [0u8; MAXP_LEN];
        out.copy_from_slice(bytemuck::bytes_of(&fields));
        out
    }

    /// `true` if this is a version 1.0 record, used by fonts with TrueType
    /// outlines.
    ///
    /// Fonts with CFF outlines use version 0.5, in which only `num_glyphs`
    /// is meaningful.
    pub fn is_truetype(&self) -> bool {
        self.version == Version16Dot16::VERSION_1_0
    }

    /// The 16-bit fields of this record paired with their names, in the order
    /// they are encoded.
    pub fn named_fields(&self) -> [(&'static str, u16); 14] {
        [
            ("numGlyphs", self.num_glyphs),
            ("maxPoints", self.max_points),
            ("maxContours", self.max_contours),
            ("maxComponentPoints", self.max_component_points),
            ("maxComponentContours", self.max_component_contours),
            ("maxZones", self.max_zones),
            ("maxTwilightPoints", self.max_twilight_points),
            ("maxStorage", self.max_storage),
            ("maxFunctionDefs", self.max_function_defs),
            ("maxInstructionDefs", self.max_instruction_defs),
            ("maxStackElements", self.max_stack_elements),
            ("maxSizeOfInstructions", self.max_size_of_instructions),
            ("maxComponentElements", self.max_component_elements),
            ("maxComponentDepth", self.max_component_depth),
        ]
    }

    /// A multi-line, human readable rendering of every field.
    ///
    /// This is the same as the `Display` impl.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn to_fixed_fields(&self) -> MaxpFixedFields {
        MaxpFixedFields {
            version: self.version.into(),
            num_glyphs: self.num_glyphs.into(),
            max_points: self.max_points.into(),
            max_contours: self.max_contours.into(),
            max_component_points: self.max_component_points.into(),
            max_component_contours: self.max_component_contours.into(),
            max_zones: self.max_zones.into(),
            max_twilight_points: self.max_twilight_points.into(),
            max_storage: self.max_storage.into(),
            max_function_defs: self.max_function_defs.into(),
            max_instruction_defs: self.max_instruction_defs.into(),
            max_stack_elements: self.max_stack_elements.into(),
            max_size_of_instructions: self.max_size_of_instructions.into(),
            max_component_elements: self.max_component_elements.into(),
            max_component_depth: self.max_component_depth.into(),
        }
    }
}

impl From<Maxp<'_>> for MaxProfile {
    fn from(maxp: Maxp<'_>) -> Self {
        MaxProfile {
            version: maxp.version(),
            num_glyphs: maxp.num_glyphs(),
            max_points: maxp.max_points(),
            max_contours: maxp.max_contours(),
            max_component_points: maxp.max_component_points(),
            max_component_contours: maxp.max_component_contours(),
            max_zones: maxp.max_zones(),
            max_twilight_points: maxp.max_twilight_points(),
            max_storage: maxp.max_storage(),
            max_function_defs: maxp.max_function_defs(),
            max_instruction_defs: maxp.max_instruction_defs(),
            max_stack_elements: maxp.max_stack_elements(),
            max_size_of_instructions: maxp.max_size_of_instructions(),
            max_component_elements: maxp.max_component_elements(),
            max_component_depth: maxp.max_component_depth(),
        }
    }
}

impl FixedSize for MaxProfile {
    const RAW_BYTE_LEN: usize = MAXP_LEN;
}

impl TopLevelTable for MaxProfile {
    const TAG: Tag = TAG;
}

impl FontWrite for MaxProfile {
    fn write_into(&self, writer: &mut TableWriter) {
        writer.write_slice(&self.encode())
    }
}

impl fmt::Display for MaxProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(
            f,
            "version",
            format_args!("0x{:08X}", self.version.to_u32()),
        )?;
        for (name, value) in self.named_fields() {
            write_field(f, name, value)?;
        }
        Ok(())
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, name: &str, value: impl fmt::Display) -> fmt::Result {
    let pad = NAME_COLUMN_WIDTH.saturating_sub(name.len());
    writeln!(f, "{name}:{:pad$}{value}", "")
}
