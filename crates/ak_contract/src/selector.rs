use alloc::vec::Vec;

use ak_describe::info::{PropertyInfo, TypeInfo};

use crate::ContractError;

/// Chooses the properties that take part in serialization.
///
/// A property is selected when its getter and setter are both
/// [`Access::Public`] and it takes no index. The result is sorted by name,
/// byte-wise, so the declaration order of a type never affects its keys.
///
/// [`Access::Public`]: ak_describe::info::Access::Public
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertySelector;

impl PropertySelector {
    /// Returns the selectable properties of `info`, sorted by name.
    ///
    /// Types without properties (containers, leaves, enums) yield an empty
    /// list. An empty or repeated name among the selected properties is an
    /// error, never skipped.
    pub fn selectable(info: &TypeInfo) -> Result<Vec<&PropertyInfo>, ContractError> {
        let ty = info.type_path();

        let mut selected: Vec<&PropertyInfo> = info
            .properties()
            .iter()
            .filter(|p| p.is_public_read_write())
            .collect();

        if selected.iter().any(|p| p.name().is_empty()) {
            return Err(ContractError::UnnamedProperty { ty });
        }

        selected.sort_unstable_by(|a, b| a.name().cmp(b.name()));

        if let Some(pair) = selected.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(ContractError::DuplicateProperty {
                ty,
                property: pair[0].name(),
            });
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use ak_describe::info::{PropertyInfo, StructInfo, TypeInfo, Typed};

    use super::PropertySelector;
    use crate::ContractError;
    use crate::samples::{Address, SerializableProperties};

    fn names(info: &TypeInfo) -> Vec<&'static str> {
        PropertySelector::selectable(info)
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect()
    }

    #[test]
    fn only_public_writable_unindexed() {
        assert_eq!(names(SerializableProperties::type_info()), ["Number", "Text"]);
    }

    #[test]
    fn sorted_by_name() {
        assert_eq!(
            names(Address::type_info()),
            ["city", "country", "street_address", "zip_code"]
        );
        assert!(names(<Vec<u8>>::type_info()).is_empty());
    }

    #[test]
    fn degenerate_names_fail() {
        let unnamed = TypeInfo::Struct(StructInfo::new::<Address>(&[PropertyInfo::new::<u8>("")]));
        assert_eq!(
            PropertySelector::selectable(&unnamed).unwrap_err(),
            ContractError::UnnamedProperty {
                ty: "ak_contract::samples::Address"
            }
        );

        let twice = TypeInfo::Struct(StructInfo::new::<Address>(&[
            PropertyInfo::new::<u8>("city"),
            PropertyInfo::new::<u16>("city"),
        ]));
        assert!(matches!(
            PropertySelector::selectable(&twice),
            Err(ContractError::DuplicateProperty { property: "city", .. })
        ));

        // Excluded properties are not checked.
        let hidden = TypeInfo::Struct(StructInfo::new::<Address>(&[
            PropertyInfo::new::<u8>("city"),
            PropertyInfo::new::<u8>("city").read_only(),
        ]));
        assert_eq!(names(&hidden), ["city"]);
    }
}
