//! Bilingual string tables.
//!
//! Keys are flat and dotted (`dashboard.stats.enrolledChildren`). A key
//! missing from the French table falls back to English; a key missing from
//! both comes back unchanged so the gap is visible on screen.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Accepts `en`, `fr` and region variants such as `fr-CA`
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.split(['-', '_']).next() {
            Some("en") => Some(Language::En),
            Some("fr") => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }

    /// Label of the toggle button, naming the *other* language
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "FR",
            Language::Fr => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Fr => FR,
    }
}

fn find(lang: Language, key: &str) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// Looks a key up, falling back from French to English
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    find(lang, key).or_else(|| find(Language::En, key))
}

pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key).unwrap_or(key)
}

static EN: &[(&str, &str)] = &[
    // Navigation and landing
    ("signIn", "Sign In"),
    ("heroTitle", "Where Every Child's Journey Matters"),
    ("heroSubtitle", "Comprehensive daycare management designed for Canadian families and childcare providers"),
    ("startYourJourney", "Start Your Journey"),
    ("newToCareConnect", "New to CareConnect? Click \"Start Your Journey\""),
    ("featuresTitle", "Everything You Need for Quality Childcare"),
    ("featuresSubtitle", "Trusted by daycare providers and parents across Canada"),
    ("childCenteredProfiles", "Child-Centered Profiles"),
    ("childCenteredProfilesDesc", "Complete development tracking, medical records, and milestone documentation for every little one"),
    ("transparentCommunication", "Transparent Communication"),
    ("transparentCommunicationDesc", "Real-time updates, incident reports, and daily activity sharing between caregivers and families"),
    ("simplifiedBilling", "Simplified Billing"),
    ("simplifiedBillingDesc", "Automated invoicing, payment tracking, and financial management for stress-free operations"),
    ("bilingualSupport", "Bilingual Support"),
    ("bilingualSupportDesc", "Seamlessly switch between English and French for inclusive communication"),
    ("pricing", "Pricing"),
    ("choosePlan", "Choose Plan"),
    ("selectedPlan", "Selected plan"),
    ("forChildcareProviders", "For Childcare Providers"),
    ("forFamilies", "For Families"),
    ("startFreeTrial", "Start Free Trial"),
    ("joinAsParent", "Join as Parent"),
    ("allRightsReserved", "All rights reserved."),
    // Auth
    ("email", "Email"),
    ("password", "Password"),
    ("login", "Login"),
    ("register", "Register"),
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("confirmPassword", "Confirm Password"),
    ("phone", "Phone"),
    ("form.createAccount", "Create Account"),
    ("form.noAccount", "Don't have an account?"),
    ("form.haveAccount", "Already have an account?"),
    ("auth.welcomeBack", "Welcome back"),
    ("auth.loginSuccess", "Logged in successfully"),
    ("auth.registerSuccess", "Account created successfully"),
    ("auth.sessionExpired", "Your session has expired. Please log in again."),
    ("userTypes.title", "Choose Your Role"),
    ("userTypes.subtitle", "Select your role to get started with CareConnect Canada"),
    ("userTypes.daycare.title", "For Childcare Providers"),
    ("userTypes.daycare.description", "Manage your daycare operations, track children's development, and communicate with families"),
    ("userTypes.parent.title", "For Families"),
    ("userTypes.parent.description", "Stay connected with your child's daily activities, development, and communicate with caregivers"),
    ("registration.personalInfo", "Personal Information"),
    ("registration.daycareInfo", "Daycare Information"),
    ("registration.daycareName", "Daycare Name"),
    ("registration.licenseNumber", "License Number"),
    ("registration.address", "Address"),
    ("registration.city", "City"),
    ("registration.province", "Province"),
    ("registration.postalCode", "Postal Code"),
    ("registration.capacity", "Capacity"),
    ("registration.description", "Description"),
    ("registration.programTypes", "Program Types"),
    ("registration.ageGroups", "Age Groups Served"),
    ("registration.emergencyContact", "Emergency Contact"),
    ("registration.invitation", "Invitation"),
    ("registration.invitationFor", "You were invited by"),
    ("registration.invalidInvitation", "This invitation is not valid."),
    // Dashboard
    ("dashboard.goodMorning", "Good Morning!"),
    ("dashboard.subtitle", "Here's what's happening at your daycare today"),
    ("dashboard.todaysDate", "Today's Date"),
    ("dashboard.viewChildren", "View Children"),
    ("dashboard.stats.enrolledChildren", "Enrolled Children"),
    ("dashboard.stats.presentToday", "Present Today"),
    ("dashboard.stats.recentIncidents", "Recent Incidents"),
    ("dashboard.stats.waitlisted", "Waitlisted"),
    ("dashboard.stats.outstanding", "Outstanding Balance"),
    ("dashboard.quickActions.title", "Quick Actions"),
    ("dashboard.quickActions.addChild", "Add Child"),
    ("dashboard.quickActions.reportIncident", "Report Incident"),
    ("dashboard.quickActions.createPayment", "Create Invoice"),
    ("dashboard.parentTitle", "My Family"),
    ("dashboard.myChildren", "My Children"),
    ("dashboard.pendingInvoices", "Pending Invoices"),
    ("dashboard.adminTitle", "System Administration"),
    ("dashboard.daycares", "Daycares"),
    ("dashboard.users", "Users"),
    ("nav.dashboard", "Dashboard"),
    ("nav.children", "Children"),
    ("nav.incidents", "Incidents"),
    ("nav.payments", "Payments"),
    ("nav.account", "Account"),
    ("nav.ageGroups", "Age Groups"),
    ("common.loading", "Loading..."),
    ("common.cancel", "Cancel"),
    ("common.save", "Save"),
    ("common.saving", "Saving..."),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.add", "Add"),
    ("common.remove", "Remove"),
    ("common.close", "Close"),
    ("common.logout", "Logout"),
    ("common.noData", "No data available"),
    ("common.confirmDelete", "Are you sure you want to delete this?"),
    ("common.saved", "Changes saved"),
    // Children
    ("childrenManagement", "Children Management"),
    ("manageAllEnrolledChildren", "Manage all enrolled children"),
    ("searchChildren", "Search children..."),
    ("addNewChild", "Add New Child"),
    ("age", "Age"),
    ("ageGroup", "Age Group"),
    ("status", "Status"),
    ("filter.all", "All"),
    ("filter.present", "Present"),
    ("filter.enrolled", "Enrolled"),
    ("filter.waitlist", "Waitlist"),
    ("childStatus.enrolled", "Enrolled"),
    ("childStatus.waitlist", "Waitlist"),
    ("childStatus.withdrawn", "Withdrawn"),
    ("childStatus.graduated", "Graduated"),
    ("backToChildren", "Back to Children"),
    ("editChild", "Edit Child"),
    ("basicInformation", "Basic Information"),
    ("dateOfBirth", "Date of Birth"),
    ("enrollmentDate", "Enrollment Date"),
    ("assignedStaff", "Assigned Staff"),
    ("noStaffAssigned", "No staff assigned"),
    ("recentIncidents", "Recent Incidents"),
    ("noRecentIncidents", "No recent incidents"),
    ("parentGuardianInformation", "Parent/Guardian Information"),
    ("primaryContact", "Primary"),
    ("canPickUp", "Can pick up"),
    ("emergencyContacts", "Emergency Contacts"),
    ("addContact", "Add Contact"),
    ("accessPermissions", "Pickup Authorization"),
    ("addPerson", "Add Person"),
    ("authorized", "Authorized"),
    ("notAuthorized", "Not authorized"),
    ("relation", "Relation"),
    ("name", "Name"),
    ("allergies", "Allergies"),
    ("medications", "Medications"),
    ("medicalConditions", "Medical Conditions"),
    ("medicalInformation", "Medical Information"),
    ("none", "None"),
    ("other", "Other (comma separated)"),
    ("severity.mild", "Mild"),
    ("severity.moderate", "Moderate"),
    ("severity.life_threatening", "Life-threatening"),
    ("childDeleted", "Child removed"),
    ("childSaved", "Child saved"),
    // Incidents
    ("incidents.title", "Incident Reports"),
    ("incidents.new", "Report Incident"),
    ("incidents.child", "Child"),
    ("incidents.type", "Incident Type"),
    ("incidents.severity", "Severity"),
    ("incidents.description", "Description"),
    ("incidents.location", "Location"),
    ("incidents.witnesses", "Witnesses"),
    ("incidents.immediateAction", "Immediate Action Taken"),
    ("incidents.parentNotified", "Parent notified"),
    ("incidents.resolve", "Resolve"),
    ("incidents.close", "Close"),
    ("incidents.empty", "No incidents reported"),
    ("incidents.created", "Incident reported"),
    ("incidents.updated", "Incident updated"),
    // Payments
    ("payments.title", "Billing & Payments"),
    ("payments.invoices", "Invoices"),
    ("payments.history", "Payment History"),
    ("payments.invoiceNumber", "Invoice #"),
    ("payments.amount", "Amount"),
    ("payments.balance", "Balance"),
    ("payments.dueDate", "Due Date"),
    ("payments.method", "Payment Method"),
    ("payments.pay", "Pay Now"),
    ("payments.paid", "Payment recorded"),
    ("payments.newInvoice", "New Invoice"),
    ("payments.invoiceCreated", "Invoice created"),
    ("payments.totalBilled", "Total Billed"),
    ("payments.outstanding", "Outstanding"),
    ("payments.overdue", "Overdue"),
    ("payments.empty", "No invoices"),
    // Account and subscription
    ("account.title", "Manage Account"),
    ("account.profile", "Profile"),
    ("account.preferredLanguage", "Preferred Language"),
    ("account.changePassword", "Change Password"),
    ("account.currentPassword", "Current Password"),
    ("account.newPassword", "New Password"),
    ("account.passwordChanged", "Password changed"),
    ("account.profileUpdated", "Profile updated"),
    ("subscription.title", "Subscription"),
    ("subscription.plan", "Plan"),
    ("subscription.status", "Status"),
    ("subscription.expires", "Expires"),
    ("subscription.daysLeft", "days left"),
    ("subscription.trialDaysLeft", "trial days left"),
    ("subscription.none", "No active subscription"),
    ("subscription.renew", "Renew"),
    ("subscription.extend", "Extend 12 months"),
    ("subscription.cancel", "Cancel Subscription"),
    ("subscription.cancelReason", "Reason for cancelling"),
    ("subscription.upgrade", "Upgrade"),
    ("subscription.updated", "Subscription updated"),
    ("subscription.notifications", "Notifications"),
    ("plan.free", "Free"),
    ("plan.monthly", "Monthly"),
    ("plan.yearly", "Yearly"),
    ("plan.lifetime", "Lifetime"),
    // Age groups
    ("ageGroups.title", "Age Groups"),
    ("ageGroups.new", "New Age Group"),
    ("ageGroups.minMonths", "Minimum age (months)"),
    ("ageGroups.maxMonths", "Maximum age (months)"),
    ("ageGroups.saved", "Age group saved"),
    ("ageGroups.deleted", "Age group deleted"),
    ("ageGroups.empty", "No age groups defined"),
    // Errors
    ("errors.REQUIRED_FIELD", "This field is required."),
    ("errors.PASSWORD_MISMATCH", "Passwords must match."),
    ("errors.PASSWORD_TOO_SHORT", "Password must be at least 8 characters."),
    ("errors.INVALID_EMAIL", "Please enter a valid email address."),
    ("errors.SELECT_PROGRAM_TYPE", "Please select at least one program type."),
    ("errors.SELECT_AGE_GROUP", "Please select at least one age group."),
    ("errors.FILL_ALL_REQUIRED", "Please fill all required fields."),
    ("errors.DUPLICATE_LICENSE_NUMBER", "A daycare with that license number already exists."),
    ("errors.EMAIL_EXISTS", "An account with that email already exists."),
    ("errors.INTERNAL_ERROR", "An unexpected error occurred, please try again."),
    ("errors.VALIDATION_ERROR", "Some fields are invalid."),
    ("errors.INVALID_CREDENTIALS", "Invalid email or password."),
    ("errors.ACCOUNT_DISABLED", "This account has been disabled."),
    ("errors.INVALID_INVITATION", "This invitation is not valid."),
    ("errors.INVITATION_EXPIRED", "This invitation has expired."),
    ("errors.INVALID_TOKEN", "Your session is no longer valid."),
    ("errors.USER_NOT_FOUND", "No account matches that email."),
    ("errors.WEAK_PASSWORD", "Please choose a stronger password."),
    ("errors.NETWORK", "Network error. Please try again."),
    ("errors.UNAUTHORIZED", "Please log in to continue."),
    ("errors.NOT_FOUND", "The requested record was not found."),    ("common.backHome", "Back to home"),
    ("notAvailable", "N/A"),
    ("selectAgeGroup", "Select an age group"),
    ("userTypes.getStarted", "Get started"),
    ("registration.daycareTitle", "Register your daycare"),
    ("registration.parentTitle", "Create your parent account"),
    ("registration.backToSelection", "Back to account type"),
    ("registration.selectProvince", "Select a province"),
    ("registration.changePlan", "Change plan"),
    ("registration.freeForParents", "Parents always join for free."),
    ("registration.subscriptionActivated", "Your subscription is active."),
    ("registration.subscriptionLater", "Your account was created, but the plan could not be activated. You can subscribe from Manage Account."),
    ("noParent", "No parent or guardian on file"),
    ("noEmergencyContacts", "No emergency contacts"),
    ("noAccessPermissions", "No access permissions"),
    ("noAllergies", "No known allergies"),
    ("noMedications", "No medications"),
    ("noConditions", "No medical conditions"),
    ("incidents.report", "Report Incident"),
    ("incidents.selectChild", "Select a child"),
    ("incidents.selectType", "Select a type"),
    ("invoiceStatus.paid", "Paid"),
    ("invoiceStatus.pending", "Pending"),
    ("invoiceStatus.overdue", "Overdue"),
    ("invoiceStatus.other", "Other"),
    ("payments.invoiceType", "Invoice Type"),
    ("payments.createInvoice", "Create Invoice"),
    ("payments.confirmPayment", "Confirm Payment"),
    ("payments.paymentSuccess", "Payment completed"),
    ("subscription.started", "Started"),
    ("subscription.trialEnds", "Trial ends"),
    ("subscription.confirmCancel", "Are you sure you want to cancel your subscription?"),
    ("subscription.statuses.active", "Active"),
    ("subscription.statuses.trial", "Trial"),
    ("subscription.statuses.expired", "Expired"),
    ("subscription.statuses.cancelled", "Cancelled"),
    ("subscription.statuses.unknown", "Unknown"),
];

static FR: &[(&str, &str)] = &[
    ("signIn", "Se connecter"),
    ("heroTitle", "Où chaque parcours d'enfant compte"),
    ("heroSubtitle", "Gestion complète de garderie conçue pour les familles canadiennes et les fournisseurs de services de garde"),
    ("startYourJourney", "Commencer votre parcours"),
    ("newToCareConnect", "Nouveau sur CareConnect? Cliquez sur \"Commencer votre parcours\""),
    ("featuresTitle", "Tout ce dont vous avez besoin pour des soins de qualité"),
    ("featuresSubtitle", "Approuvé par les fournisseurs de garderie et les parents à travers le Canada"),
    ("childCenteredProfiles", "Profils centrés sur l'enfant"),
    ("childCenteredProfilesDesc", "Suivi complet du développement, dossiers médicaux et documentation des étapes importantes pour chaque petit"),
    ("transparentCommunication", "Communication transparente"),
    ("transparentCommunicationDesc", "Mises à jour en temps réel, rapports d'incidents et partage d'activités quotidiennes entre soignants et familles"),
    ("simplifiedBilling", "Facturation simplifiée"),
    ("simplifiedBillingDesc", "Facturation automatisée, suivi des paiements et gestion financière pour des opérations sans stress"),
    ("bilingualSupport", "Support bilingue"),
    ("bilingualSupportDesc", "Basculez facilement entre l'anglais et le français pour une communication inclusive"),
    ("pricing", "Tarification"),
    ("choosePlan", "Choisir ce forfait"),
    ("selectedPlan", "Forfait choisi"),
    ("forChildcareProviders", "Pour les fournisseurs de services de garde"),
    ("forFamilies", "Pour les familles"),
    ("startFreeTrial", "Commencer l'essai gratuit"),
    ("joinAsParent", "Rejoindre en tant que parent"),
    ("allRightsReserved", "Tous droits réservés."),
    ("email", "Courriel"),
    ("password", "Mot de passe"),
    ("login", "Connexion"),
    ("register", "S'inscrire"),
    ("firstName", "Prénom"),
    ("lastName", "Nom de famille"),
    ("confirmPassword", "Confirmer le mot de passe"),
    ("phone", "Téléphone"),
    ("form.createAccount", "Créer un compte"),
    ("form.noAccount", "Pas encore de compte?"),
    ("form.haveAccount", "Vous avez déjà un compte?"),
    ("auth.welcomeBack", "Bon retour"),
    ("auth.loginSuccess", "Connexion réussie"),
    ("auth.registerSuccess", "Compte créé avec succès"),
    ("auth.sessionExpired", "Votre session a expiré. Veuillez vous reconnecter."),
    ("userTypes.title", "Choisissez votre rôle"),
    ("userTypes.subtitle", "Sélectionnez votre rôle pour commencer avec CareConnect Canada"),
    ("userTypes.daycare.title", "Pour les fournisseurs de services de garde"),
    ("userTypes.daycare.description", "Gérez vos opérations de garderie, suivez le développement des enfants et communiquez avec les familles"),
    ("userTypes.parent.title", "Pour les familles"),
    ("userTypes.parent.description", "Restez connecté avec les activités quotidiennes de votre enfant, son développement et communiquez avec les soignants"),
    ("registration.personalInfo", "Renseignements personnels"),
    ("registration.daycareInfo", "Renseignements sur la garderie"),
    ("registration.daycareName", "Nom de la garderie"),
    ("registration.licenseNumber", "Numéro de licence"),
    ("registration.address", "Adresse"),
    ("registration.city", "Ville"),
    ("registration.province", "Province"),
    ("registration.postalCode", "Code postal"),
    ("registration.capacity", "Capacité"),
    ("registration.description", "Description"),
    ("registration.programTypes", "Types de programme"),
    ("registration.ageGroups", "Groupes d'âge desservis"),
    ("registration.emergencyContact", "Contact d'urgence"),
    ("registration.invitation", "Invitation"),
    ("registration.invitationFor", "Vous avez été invité par"),
    ("registration.invalidInvitation", "Cette invitation n'est pas valide."),
    ("dashboard.goodMorning", "Bonjour!"),
    ("dashboard.subtitle", "Voici ce qui se passe dans votre garderie aujourd'hui"),
    ("dashboard.todaysDate", "Date d'aujourd'hui"),
    ("dashboard.viewChildren", "Voir les enfants"),
    ("dashboard.stats.enrolledChildren", "Enfants inscrits"),
    ("dashboard.stats.presentToday", "Présents aujourd'hui"),
    ("dashboard.stats.recentIncidents", "Incidents récents"),
    ("dashboard.stats.waitlisted", "Liste d'attente"),
    ("dashboard.stats.outstanding", "Solde impayé"),
    ("dashboard.quickActions.title", "Actions rapides"),
    ("dashboard.quickActions.addChild", "Ajouter un enfant"),
    ("dashboard.quickActions.reportIncident", "Signaler un incident"),
    ("dashboard.quickActions.createPayment", "Créer une facture"),
    ("dashboard.parentTitle", "Ma famille"),
    ("dashboard.myChildren", "Mes enfants"),
    ("dashboard.pendingInvoices", "Factures en attente"),
    ("dashboard.adminTitle", "Administration du système"),
    ("dashboard.daycares", "Garderies"),
    ("dashboard.users", "Utilisateurs"),
    ("nav.dashboard", "Tableau de bord"),
    ("nav.children", "Enfants"),
    ("nav.incidents", "Incidents"),
    ("nav.payments", "Paiements"),
    ("nav.account", "Compte"),
    ("nav.ageGroups", "Groupes d'âge"),
    ("common.loading", "Chargement..."),
    ("common.cancel", "Annuler"),
    ("common.save", "Enregistrer"),
    ("common.saving", "Enregistrement..."),
    ("common.delete", "Supprimer"),
    ("common.edit", "Modifier"),
    ("common.add", "Ajouter"),
    ("common.remove", "Retirer"),
    ("common.close", "Fermer"),
    ("common.logout", "Déconnexion"),
    ("common.noData", "Aucune donnée disponible"),
    ("common.confirmDelete", "Voulez-vous vraiment supprimer cet élément?"),
    ("common.saved", "Modifications enregistrées"),
    ("childrenManagement", "Gestion des enfants"),
    ("manageAllEnrolledChildren", "Gérer tous les enfants inscrits"),
    ("searchChildren", "Rechercher des enfants..."),
    ("addNewChild", "Ajouter un nouvel enfant"),
    ("age", "Âge"),
    ("ageGroup", "Groupe d'âge"),
    ("status", "Statut"),
    ("filter.all", "Tous"),
    ("filter.present", "Présents"),
    ("filter.enrolled", "Inscrits"),
    ("filter.waitlist", "Liste d'attente"),
    ("childStatus.enrolled", "Inscrit"),
    ("childStatus.waitlist", "Liste d'attente"),
    ("childStatus.withdrawn", "Retiré"),
    ("childStatus.graduated", "Diplômé"),
    ("backToChildren", "Retour aux enfants"),
    ("editChild", "Modifier l'enfant"),
    ("basicInformation", "Informations de base"),
    ("dateOfBirth", "Date de naissance"),
    ("enrollmentDate", "Date d'inscription"),
    ("assignedStaff", "Personnel assigné"),
    ("noStaffAssigned", "Aucun personnel assigné"),
    ("recentIncidents", "Incidents récents"),
    ("noRecentIncidents", "Aucun incident récent"),
    ("parentGuardianInformation", "Informations du parent/tuteur"),
    ("primaryContact", "Principal"),
    ("canPickUp", "Peut venir chercher"),
    ("emergencyContacts", "Contacts d'urgence"),
    ("addContact", "Ajouter un contact"),
    ("accessPermissions", "Autorisation de cueillette"),
    ("addPerson", "Ajouter une personne"),
    ("authorized", "Autorisé"),
    ("notAuthorized", "Non autorisé"),
    ("relation", "Lien"),
    ("name", "Nom"),
    ("allergies", "Allergies"),
    ("medications", "Médicaments"),
    ("medicalConditions", "Conditions médicales"),
    ("medicalInformation", "Informations médicales"),
    ("none", "Aucun"),
    ("other", "Autre (séparés par des virgules)"),
    ("severity.mild", "Léger"),
    ("severity.moderate", "Modéré"),
    ("severity.life_threatening", "Danger de mort"),
    ("childDeleted", "Enfant retiré"),
    ("childSaved", "Enfant enregistré"),
    ("incidents.title", "Rapports d'incidents"),
    ("incidents.new", "Signaler un incident"),
    ("incidents.child", "Enfant"),
    ("incidents.type", "Type d'incident"),
    ("incidents.severity", "Gravité"),
    ("incidents.description", "Description"),
    ("incidents.location", "Lieu"),
    ("incidents.witnesses", "Témoins"),
    ("incidents.immediateAction", "Mesures immédiates prises"),
    ("incidents.parentNotified", "Parent avisé"),
    ("incidents.resolve", "Résoudre"),
    ("incidents.close", "Fermer"),
    ("incidents.empty", "Aucun incident signalé"),
    ("incidents.created", "Incident signalé"),
    ("incidents.updated", "Incident mis à jour"),
    ("payments.title", "Facturation et paiements"),
    ("payments.invoices", "Factures"),
    ("payments.history", "Historique des paiements"),
    ("payments.invoiceNumber", "Facture n°"),
    ("payments.amount", "Montant"),
    ("payments.balance", "Solde"),
    ("payments.dueDate", "Date d'échéance"),
    ("payments.method", "Mode de paiement"),
    ("payments.pay", "Payer"),
    ("payments.paid", "Paiement enregistré"),
    ("payments.newInvoice", "Nouvelle facture"),
    ("payments.invoiceCreated", "Facture créée"),
    ("payments.totalBilled", "Total facturé"),
    ("payments.outstanding", "Impayé"),
    ("payments.overdue", "En retard"),
    ("payments.empty", "Aucune facture"),
    ("account.title", "Gérer le compte"),
    ("account.profile", "Profil"),
    ("account.preferredLanguage", "Langue préférée"),
    ("account.changePassword", "Changer le mot de passe"),
    ("account.currentPassword", "Mot de passe actuel"),
    ("account.newPassword", "Nouveau mot de passe"),
    ("account.passwordChanged", "Mot de passe modifié"),
    ("account.profileUpdated", "Profil mis à jour"),
    ("subscription.title", "Abonnement"),
    ("subscription.plan", "Forfait"),
    ("subscription.status", "Statut"),
    ("subscription.expires", "Expire le"),
    ("subscription.daysLeft", "jours restants"),
    ("subscription.trialDaysLeft", "jours d'essai restants"),
    ("subscription.none", "Aucun abonnement actif"),
    ("subscription.renew", "Renouveler"),
    ("subscription.extend", "Prolonger de 12 mois"),
    ("subscription.cancel", "Annuler l'abonnement"),
    ("subscription.cancelReason", "Raison de l'annulation"),
    ("subscription.upgrade", "Passer à ce forfait"),
    ("subscription.updated", "Abonnement mis à jour"),
    ("subscription.notifications", "Avis"),
    ("plan.free", "Gratuit"),
    ("plan.monthly", "Mensuel"),
    ("plan.yearly", "Annuel"),
    ("plan.lifetime", "À vie"),
    ("ageGroups.title", "Groupes d'âge"),
    ("ageGroups.new", "Nouveau groupe d'âge"),
    ("ageGroups.minMonths", "Âge minimum (mois)"),
    ("ageGroups.maxMonths", "Âge maximum (mois)"),
    ("ageGroups.saved", "Groupe d'âge enregistré"),
    ("ageGroups.deleted", "Groupe d'âge supprimé"),
    ("ageGroups.empty", "Aucun groupe d'âge défini"),
    ("errors.REQUIRED_FIELD", "Ce champ est requis."),
    ("errors.PASSWORD_MISMATCH", "Les mots de passe doivent correspondre."),
    ("errors.PASSWORD_TOO_SHORT", "Le mot de passe doit contenir au moins 8 caractères."),
    ("errors.INVALID_EMAIL", "Veuillez entrer une adresse courriel valide."),
    ("errors.SELECT_PROGRAM_TYPE", "Sélectionnez au moins un type de programme."),
    ("errors.SELECT_AGE_GROUP", "Sélectionnez au moins un groupe d’âge."),
    ("errors.FILL_ALL_REQUIRED", "Veuillez remplir tous les champs obligatoires."),
    ("errors.DUPLICATE_LICENSE_NUMBER", "Une garderie avec ce numéro de licence existe déjà."),
    ("errors.EMAIL_EXISTS", "Un compte avec ce courriel existe déjà."),
    ("errors.INTERNAL_ERROR", "Une erreur inattendue est survenue, veuillez réessayer."),
    ("errors.VALIDATION_ERROR", "Certains champs sont invalides."),
    ("errors.INVALID_CREDENTIALS", "Courriel ou mot de passe invalide."),
    ("errors.ACCOUNT_DISABLED", "Ce compte a été désactivé."),
    ("errors.INVALID_INVITATION", "Cette invitation n'est pas valide."),
    ("errors.INVITATION_EXPIRED", "Cette invitation a expiré."),
    ("errors.INVALID_TOKEN", "Votre session n'est plus valide."),
    ("errors.USER_NOT_FOUND", "Aucun compte ne correspond à ce courriel."),
    ("errors.WEAK_PASSWORD", "Veuillez choisir un mot de passe plus robuste."),
    ("errors.NETWORK", "Erreur réseau. Veuillez réessayer."),
    ("errors.UNAUTHORIZED", "Veuillez vous connecter pour continuer."),
    ("errors.NOT_FOUND", "L'élément demandé est introuvable."),    ("common.backHome", "Retour à l'accueil"),
    ("notAvailable", "N/D"),
    ("selectAgeGroup", "Choisir un groupe d'âge"),
    ("userTypes.getStarted", "Commencer"),
    ("registration.daycareTitle", "Inscrire votre garderie"),
    ("registration.parentTitle", "Créer votre compte parent"),
    ("registration.backToSelection", "Retour au type de compte"),
    ("registration.selectProvince", "Choisir une province"),
    ("registration.changePlan", "Changer de forfait"),
    ("registration.freeForParents", "L'inscription est toujours gratuite pour les parents."),
    ("registration.subscriptionActivated", "Votre abonnement est actif."),
    ("registration.subscriptionLater", "Votre compte a été créé, mais le forfait n'a pas pu être activé. Vous pouvez vous abonner depuis Gérer le compte."),
    ("noParent", "Aucun parent ou tuteur au dossier"),
    ("noEmergencyContacts", "Aucun contact d'urgence"),
    ("noAccessPermissions", "Aucune autorisation d'accès"),
    ("noAllergies", "Aucune allergie connue"),
    ("noMedications", "Aucun médicament"),
    ("noConditions", "Aucune condition médicale"),
    ("incidents.report", "Signaler l'incident"),
    ("incidents.selectChild", "Choisir un enfant"),
    ("incidents.selectType", "Choisir un type"),
    ("invoiceStatus.paid", "Payée"),
    ("invoiceStatus.pending", "En attente"),
    ("invoiceStatus.overdue", "En retard"),
    ("invoiceStatus.other", "Autre"),
    ("payments.invoiceType", "Type de facture"),
    ("payments.createInvoice", "Créer la facture"),
    ("payments.confirmPayment", "Confirmer le paiement"),
    ("payments.paymentSuccess", "Paiement effectué"),
    ("subscription.started", "Début"),
    ("subscription.trialEnds", "Fin de l'essai"),
    ("subscription.confirmCancel", "Voulez-vous vraiment annuler votre abonnement?"),
    ("subscription.statuses.active", "Actif"),
    ("subscription.statuses.trial", "Essai"),
    ("subscription.statuses.expired", "Expiré"),
    ("subscription.statuses.cancelled", "Annulé"),
    ("subscription.statuses.unknown", "Inconnu"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_english_key_has_french() {
        let fr: HashSet<&str> = FR.iter().map(|(k, _)| *k).collect();
        let missing: Vec<&str> = EN
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !fr.contains(k))
            .collect();
        assert!(missing.is_empty(), "missing French keys: {:?}", missing);
    }

    #[test]
    fn test_no_duplicate_keys() {
        for table in [EN, FR] {
            let mut seen = HashSet::new();
            for (key, _) in table {
                assert!(seen.insert(*key), "duplicate key {}", key);
            }
        }
    }

    #[test]
    fn test_translate_fallbacks() {
        assert_eq!(translate(Language::Fr, "login"), "Connexion");
        assert_eq!(translate(Language::En, "login"), "Login");
        assert_eq!(translate(Language::Fr, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("fr-CA"), Some(Language::Fr));
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::En.toggle(), Language::Fr);
        assert_eq!(Language::Fr.toggle_label(), "EN");
    }
}
