//! Behaviour of the maxp record through the public API.

use maxprof::{
    dump_table, types::Version16Dot16, FontData, FontRead, FormatError, MaxProfile, Maxp,
    TopLevelTable,
};
use maxprof_test_data::maxp as test_data;
use pretty_assertions::assert_eq;

fn profile_with_all(value: u16) -> MaxProfile {
    MaxProfile {
        version: Version16Dot16::VERSION_1_0,
        num_glyphs: value,
        max_points: value,
        max_contours: value,
        max_component_points: value,
        max_component_contours: value,
        max_zones: value,
        max_twilight_points: value,
        max_storage: value,
        max_function_defs: value,
        max_instruction_defs: value,
        max_stack_elements: value,
        max_size_of_instructions: value,
        max_component_elements: value,
        max_component_depth: value,
    }
}

#[test]
fn encoded_size_is_fixed() {
    for value in [0, 1, 2, 0x7FFF, 0x8000, 0xFFFF] {
        let profile = profile_with_all(value);
        assert_eq!(profile.encode().len(), 32);
        assert_eq!(dump_table(&profile).len(), MaxProfile::len());
        assert_eq!(MaxProfile::decode(&profile.encode()), Ok(profile));
    }
}

#[test]
fn decode_requires_exactly_32_bytes() {
    assert_eq!(MaxProfile::decode(&[]), Err(FormatError::BadSize(0)));
    assert_eq!(MaxProfile::decode(&[0; 31]), Err(FormatError::BadSize(31)));
    assert_eq!(MaxProfile::decode(&[0; 33]), Err(FormatError::BadSize(33)));
    assert!(MaxProfile::decode(&[0; 32]).is_ok());
}

#[test]
fn bad_size_message_has_length() {
    let err = MaxProfile::decode(&[0; 31]).unwrap_err();
    assert_eq!(err.to_string(), "Bad size for maxp table (31 bytes)");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("31"));
}

#[test]
fn default_scenario() {
    let encoded = MaxProfile::default().encode();
    assert_eq!(encoded.as_slice(), test_data::DEFAULT);
    assert_eq!(
        MaxProfile::decode(test_data::DEFAULT),
        Ok(MaxProfile::default())
    );
}

#[test]
fn view_and_owned_agree() {
    let data = FontData::new(test_data::TRUETYPE);
    let view = Maxp::read(data).unwrap();
    let owned = MaxProfile::decode(test_data::TRUETYPE).unwrap();
    assert_eq!(view.to_owned_table(), owned);
    assert_eq!(MaxProfile::from(view).encode().as_slice(), view.as_bytes());
    assert_eq!(view.fixed_fields().num_glyphs.get(), owned.num_glyphs);
}

#[test]
fn sliced_from_larger_buffer() {
    // the record as it might sit inside a font, after a table directory
    let mut font = vec![0xAAu8; 12];
    font.extend_from_slice(test_data::TRUETYPE);
    font.extend_from_slice(&[0xBB; 4]);

    let data = FontData::new(&font);
    let table = data.slice_len(12, MaxProfile::len()).unwrap();
    let maxp = Maxp::read(table).unwrap();
    assert_eq!(maxp.num_glyphs(), 1294);
    assert_eq!(data.read_at::<u16>(16).unwrap(), 1294);

    let too_long = data.slice(12..).unwrap();
    assert_eq!(Maxp::read(too_long).err(), Some(FormatError::BadSize(36)));
}

#[test]
fn tag_is_maxp() {
    assert_eq!(MaxProfile::TAG, "maxp");
    assert_eq!(maxprof::tables::maxp::TAG.to_string(), "maxp");
}
