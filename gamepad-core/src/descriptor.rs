//! Helpers for the static USB descriptor tables drivers publish.

/// `bDescriptorType` of a USB device descriptor.
pub const DEVICE_DESCRIPTOR_TYPE: u8 = 1;

/// Length of a USB device descriptor.
pub const DEVICE_DESCRIPTOR_LEN: usize = 18;

/// Vendor and product id taken from a device descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    pub vendor_id: u16,
    pub product_id: u16,
    pub device_version: u16,
}

impl DeviceIdentity {
    /// Read the identity fields of a device descriptor.
    ///
    /// Returns `None` if `descriptor` is not an 18-byte device descriptor.
    #[must_use]
    pub fn parse(descriptor: &[u8]) -> Option<Self> {
        if descriptor.len() != DEVICE_DESCRIPTOR_LEN
            || descriptor[0] as usize != DEVICE_DESCRIPTOR_LEN
            || descriptor[1] != DEVICE_DESCRIPTOR_TYPE
        {
            return None;
        }
        let word = |i: usize| u16::from_le_bytes([descriptor[i], descriptor[i + 1]]);
        Some(Self {
            vendor_id: word(8),
            product_id: word(10),
            device_version: word(12),
        })
    }
}
