//! Stage display strings
//!
//! Labels and descriptions are presentation data looked up by stage. The
//! workflow engine never reads them.

use crate::schemas::{Locale, Stage};

/// Short label for a stage
pub fn stage_label(stage: Stage, locale: Locale) -> &'static str {
    match locale {
        Locale::Th => match stage {
            Stage::Triage => "คัดกรอง",
            Stage::Quotation => "เสนอราคา",
            Stage::Execution => "ดำเนินการซ่อม",
            Stage::Qa => "ตรวจสอบคุณภาพ",
            Stage::Closure => "ปิดงาน",
            Stage::Warranty => "รับประกัน",
        },
        Locale::En => match stage {
            Stage::Triage => "Triage",
            Stage::Quotation => "Quotation",
            Stage::Execution => "Execution",
            Stage::Qa => "Quality Assurance",
            Stage::Closure => "Closure",
            Stage::Warranty => "Warranty",
        },
    }
}

/// One-sentence description of what happens in a stage
pub fn stage_description(stage: Stage, locale: Locale) -> &'static str {
    match locale {
        Locale::Th => match stage {
            Stage::Triage => "รับเครื่องและวินิจฉัยอาการเสีย",
            Stage::Quotation => "ประเมินราคาและรอลูกค้าอนุมัติ",
            Stage::Execution => "ช่างดำเนินการซ่อมตามใบเสนอราคา",
            Stage::Qa => "ทดสอบและตรวจสอบคุณภาพงานซ่อม",
            Stage::Closure => "สรุปค่าใช้จ่ายจริงและส่งมอบเครื่อง",
            Stage::Warranty => "อยู่ในระยะเวลารับประกันหลังการซ่อม",
        },
        Locale::En => match stage {
            Stage::Triage => "Device received and fault diagnosed",
            Stage::Quotation => "Cost estimated and awaiting customer approval",
            Stage::Execution => "Technician carrying out the quoted repair",
            Stage::Qa => "Repair tested and quality checked",
            Stage::Closure => "Actual cost settled and device handed back",
            Stage::Warranty => "Covered by the post-repair warranty",
        },
    }
}
