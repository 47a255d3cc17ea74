use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use holedns_domain::{QClass, RecordType};

pub fn from_hickory_type(rt: HickoryRecordType) -> RecordType {
    match rt {
        HickoryRecordType::A => RecordType::A,
        HickoryRecordType::AAAA => RecordType::Aaaa,
        HickoryRecordType::CNAME => RecordType::Cname,
        HickoryRecordType::MX => RecordType::Mx,
        HickoryRecordType::TXT => RecordType::Txt,
        HickoryRecordType::NS => RecordType::Ns,
        HickoryRecordType::SOA => RecordType::Soa,
        HickoryRecordType::PTR => RecordType::Ptr,
        other => RecordType::Other(u16::from(other)),
    }
}

pub fn to_hickory_type(rt: RecordType) -> HickoryRecordType {
    match rt {
        RecordType::A => HickoryRecordType::A,
        RecordType::Aaaa => HickoryRecordType::AAAA,
        RecordType::Cname => HickoryRecordType::CNAME,
        RecordType::Mx => HickoryRecordType::MX,
        RecordType::Txt => HickoryRecordType::TXT,
        RecordType::Ns => HickoryRecordType::NS,
        RecordType::Soa => HickoryRecordType::SOA,
        RecordType::Ptr => HickoryRecordType::PTR,
        RecordType::Other(v) => HickoryRecordType::from(v),
    }
}

pub fn from_hickory_class(class: DNSClass) -> QClass {
    match class {
        DNSClass::IN => QClass::In,
        DNSClass::CH => QClass::Ch,
        other => QClass::Other(u16::from(other)),
    }
}

pub fn to_hickory_class(class: QClass) -> DNSClass {
    match class {
        QClass::In => DNSClass::IN,
        QClass::Ch => DNSClass::CH,
        QClass::Other(v) => DNSClass::from(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_common_record_types() {
        for rt in [
            RecordType::A,
            RecordType::Aaaa,
            RecordType::Cname,
            RecordType::Mx,
            RecordType::Txt,
            RecordType::Ns,
            RecordType::Soa,
            RecordType::Ptr,
        ] {
            assert_eq!(from_hickory_type(to_hickory_type(rt)), rt);
        }
    }
}
